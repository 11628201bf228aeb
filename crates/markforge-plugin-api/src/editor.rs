//! Editor capabilities exposed to plugins.
//!
//! Pure pass-through to the host's editor component: no buffer semantics
//! live in this layer. Observer registrations return a
//! [`Disposer`] like every other registration in the SDK.

use markforge_sdk_core::{
    Disposer, EditorPosition, EditorRange, EditorSelection, FindOptions, MarkdownFormat,
};
use std::sync::Arc;

/// Callback for buffer content changes.
pub type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback for selection changes. `None` means the selection collapsed.
pub type SelectionHandler = Arc<dyn Fn(Option<&EditorSelection>) + Send + Sync>;

/// Callback for cursor movement.
pub type CursorHandler = Arc<dyn Fn(EditorPosition) + Send + Sync>;

/// The editor capability surface consumed by plugins.
pub trait EditorApi: Send + Sync {
    // Content

    fn content(&self) -> String;
    fn set_content(&self, content: &str);

    /// Insert at the given position, or at the cursor when `None`.
    fn insert_text(&self, text: &str, position: Option<EditorPosition>);
    fn replace_range(&self, range: EditorRange, text: &str);

    // Selection and cursor

    fn selection(&self) -> Option<EditorSelection>;
    fn set_selection(&self, range: EditorRange);
    fn select_all(&self);
    fn cursor(&self) -> EditorPosition;
    fn set_cursor(&self, position: EditorPosition);

    // Search and replace

    fn find(&self, query: &str, options: FindOptions) -> Vec<EditorRange>;

    /// Replace all matches; returns the number of replacements.
    fn replace(&self, query: &str, replacement: &str, options: FindOptions) -> usize;

    // Observers

    fn on_change(&self, callback: ChangeHandler) -> Disposer;
    fn on_selection_change(&self, callback: SelectionHandler) -> Disposer;
    fn on_cursor_change(&self, callback: CursorHandler) -> Disposer;

    // Focus

    fn focus(&self);
    fn blur(&self);
    fn is_focused(&self) -> bool;

    // History

    fn undo(&self);
    fn redo(&self);
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;

    // Lines

    fn line(&self, line: usize) -> Option<String>;
    fn line_count(&self) -> usize;
    fn insert_line(&self, line: usize, text: &str);
    fn delete_line(&self, line: usize);

    // Formatting

    /// Apply a markdown formatting operation to the selection.
    fn apply_format(&self, format: MarkdownFormat);

    // View

    fn scroll_to_line(&self, line: usize);
    fn scroll_to_cursor(&self);
    fn visible_range(&self) -> EditorRange;
}

/// A plugin-provided editor extension.
///
/// Activated against the editor when registered; `deactivate` runs when the
/// registration's disposer fires or the plugin unloads.
pub trait EditorExtension: Send + Sync {
    /// Identifier, unique among editor extensions.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    fn activate(&self, editor: &dyn EditorApi);

    fn deactivate(&self) {}
}
