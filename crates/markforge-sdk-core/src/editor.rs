//! Editor geometry and option types.

use serde::{Deserialize, Serialize};

/// A caret position. Lines and columns are zero-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorPosition {
    pub line: usize,
    pub column: usize,
}

impl EditorPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open span between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorRange {
    pub start: EditorPosition,
    pub end: EditorPosition,
}

impl EditorRange {
    pub fn new(start: EditorPosition, end: EditorPosition) -> Self {
        Self { start, end }
    }
}

/// The current selection and its text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSelection {
    pub range: EditorRange,
    pub text: String,
}

/// Options for find and replace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindOptions {
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub whole_word: bool,
    #[serde(default)]
    pub regex: bool,
}

/// A markdown formatting operation applied to the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum MarkdownFormat {
    Bold,
    Italic,
    Strikethrough,
    Code,
    Link {
        #[serde(default)]
        url: Option<String>,
    },
    Heading {
        /// 1 through 6.
        level: u8,
    },
    Blockquote,
    UnorderedList,
    OrderedList,
}

/// Options for markdown-to-HTML conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownOptions {
    /// Strip raw HTML from the output.
    pub sanitize: bool,
    /// Enable GitHub-flavored extensions (tables, task lists, strikethrough).
    pub gfm: bool,
    /// Render single newlines as hard breaks.
    pub breaks: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            sanitize: true,
            gfm: true,
            breaks: false,
        }
    }
}
