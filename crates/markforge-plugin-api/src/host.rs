//! Host capabilities exposed to plugins.
//!
//! The application implements [`HostApi`] and hands it to plugins through
//! their [`PluginContext`](crate::PluginContext); plugins never reach the
//! host through ambient globals. Registration calls return a
//! [`Disposer`] so every side effect can be reversed; fallible calls
//! propagate the host's error unchanged, with no retries at this layer.

use crate::bridge::{EventHandler, SubscriptionId};
use crate::editor::EditorExtension;
use async_trait::async_trait;
use markforge_sdk_core::{
    AppEvent, AppState, Command, Disposer, EventKind, FileInfo, KeyboardShortcut, MarkdownOptions,
    MenuItem, MenuLocation, PluginSettings, PluginSettingsConfig, SdkResult, StatusBarItem,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A file-type filter for open/save dialogs.
#[derive(Debug, Clone)]
pub struct DialogFilter {
    /// Display name, e.g. "Markdown".
    pub name: String,

    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
}

/// Options for the open-file dialog.
#[derive(Debug, Clone, Default)]
pub struct OpenDialogOptions {
    pub title: Option<String>,
    pub filters: Vec<DialogFilter>,
    pub multiple: bool,
    /// Select directories instead of files.
    pub directory: bool,
}

/// Options for the save-file dialog.
#[derive(Debug, Clone, Default)]
pub struct SaveDialogOptions {
    pub title: Option<String>,
    pub default_path: Option<PathBuf>,
    pub filters: Vec<DialogFilter>,
}

/// The host capability surface consumed by plugins.
///
/// Every `add_*`/`register_*` method returns a [`Disposer`] reversing that
/// registration. Identifier collisions within a category are host-owned:
/// last write wins.
#[async_trait]
pub trait HostApi: Send + Sync {
    // State

    /// Snapshot of the current application state.
    fn state(&self) -> AppState;

    /// The file currently focused in the editor.
    fn active_file(&self) -> Option<FileInfo>;

    // Events

    /// Subscribe a handler to one event kind.
    fn on(&self, kind: EventKind, handler: EventHandler) -> Disposer;

    /// Remove a subscription by identity. No-op if it is gone already.
    fn off(&self, kind: EventKind, subscription: SubscriptionId);

    /// Publish an event to all current subscribers of its kind.
    fn emit(&self, event: &AppEvent);

    // Commands

    fn add_command(&self, command: Command) -> Disposer;
    fn remove_command(&self, command_id: &str);
    async fn execute_command(&self, command_id: &str) -> SdkResult<()>;

    // Keyboard shortcuts

    fn add_keyboard_shortcut(&self, shortcut: KeyboardShortcut) -> Disposer;
    fn remove_keyboard_shortcut(&self, shortcut_id: &str);

    // Menus

    fn add_menu_item(&self, location: MenuLocation, item: MenuItem) -> Disposer;
    fn remove_menu_item(&self, item_id: &str);

    // Status bar

    fn add_status_bar_item(&self, item: StatusBarItem) -> Disposer;
    fn remove_status_bar_item(&self, item_id: &str);

    // Editor extensions

    fn add_editor_extension(&self, extension: Arc<dyn EditorExtension>) -> Disposer;
    fn remove_editor_extension(&self, extension_id: &str);

    // Settings

    /// Register a plugin's settings schema with the settings UI.
    fn register_settings(&self, plugin_id: &str, config: PluginSettingsConfig) -> Disposer;

    /// Load the persisted settings of a plugin. An empty mapping when
    /// nothing is stored.
    async fn load_settings(&self, plugin_id: &str) -> SdkResult<PluginSettings>;

    /// Persist the settings of a plugin.
    async fn save_settings(&self, plugin_id: &str, settings: &PluginSettings) -> SdkResult<()>;

    // Files

    async fn read_file(&self, path: &Path) -> SdkResult<String>;
    async fn write_file(&self, path: &Path, content: &str) -> SdkResult<()>;
    async fn create_file(&self, path: &Path, content: Option<&str>) -> SdkResult<()>;
    async fn delete_file(&self, path: &Path) -> SdkResult<()>;

    // Markdown conversion

    async fn markdown_to_html(&self, markdown: &str, options: MarkdownOptions)
        -> SdkResult<String>;
    async fn html_to_markdown(&self, html: &str) -> SdkResult<String>;

    // Notifications and dialogs

    fn show_notification(&self, message: &str, kind: NotificationKind);
    fn show_toast(&self, message: &str, duration: Option<Duration>);
    async fn show_confirm(&self, title: &str, message: &str) -> SdkResult<bool>;
    async fn show_prompt(
        &self,
        title: &str,
        message: &str,
        default_value: Option<&str>,
    ) -> SdkResult<Option<String>>;

    // Utilities

    async fn open_external(&self, url: &str) -> SdkResult<()>;
    async fn copy_to_clipboard(&self, text: &str) -> SdkResult<()>;
    async fn read_from_clipboard(&self) -> SdkResult<String>;

    /// Show the open-file dialog. `None` when the user cancels.
    async fn open_file_dialog(&self, options: OpenDialogOptions)
        -> SdkResult<Option<Vec<PathBuf>>>;

    /// Show the save-file dialog. `None` when the user cancels.
    async fn save_file_dialog(&self, options: SaveDialogOptions) -> SdkResult<Option<PathBuf>>;
}
