//! The closed set of application events delivered to plugins.
//!
//! Events are a tagged union: the `type` discriminator determines the
//! payload shape, and dispatch keys off [`EventKind`] rather than open
//! string matching, so an unhandled kind is a compile error at the
//! `match`, not a silent drop at runtime.

use crate::state::{AppSettings, FileInfo, ThemeInfo, WorkspaceInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An application event with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    /// A file was opened in the editor.
    #[serde(rename = "file:open")]
    FileOpen { file: FileInfo },

    /// A file was saved.
    #[serde(rename = "file:save")]
    FileSave { file: FileInfo },

    /// A file was closed.
    #[serde(rename = "file:close")]
    FileClose { file: FileInfo },

    /// The content of a file changed in the editor buffer.
    #[serde(rename = "file:change")]
    FileChange { file: FileInfo, content: String },

    /// A different workspace was opened or its file list changed.
    #[serde(rename = "workspace:change")]
    WorkspaceChange { workspace: WorkspaceInfo },

    /// The resolved theme changed.
    #[serde(rename = "theme:change")]
    ThemeChange { theme: ThemeInfo },

    /// Application settings changed.
    #[serde(rename = "settings:change")]
    SettingsChange { settings: AppSettings },
}

impl AppEvent {
    /// The discriminator of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            AppEvent::FileOpen { .. } => EventKind::FileOpen,
            AppEvent::FileSave { .. } => EventKind::FileSave,
            AppEvent::FileClose { .. } => EventKind::FileClose,
            AppEvent::FileChange { .. } => EventKind::FileChange,
            AppEvent::WorkspaceChange { .. } => EventKind::WorkspaceChange,
            AppEvent::ThemeChange { .. } => EventKind::ThemeChange,
            AppEvent::SettingsChange { .. } => EventKind::SettingsChange,
        }
    }
}

/// Discriminator for [`AppEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "file:open")]
    FileOpen,
    #[serde(rename = "file:save")]
    FileSave,
    #[serde(rename = "file:close")]
    FileClose,
    #[serde(rename = "file:change")]
    FileChange,
    #[serde(rename = "workspace:change")]
    WorkspaceChange,
    #[serde(rename = "theme:change")]
    ThemeChange,
    #[serde(rename = "settings:change")]
    SettingsChange,
}

impl EventKind {
    /// Every event kind, in a stable order. Hosts use this to wire
    /// catch-all observers.
    pub const ALL: [EventKind; 7] = [
        EventKind::FileOpen,
        EventKind::FileSave,
        EventKind::FileClose,
        EventKind::FileChange,
        EventKind::WorkspaceChange,
        EventKind::ThemeChange,
        EventKind::SettingsChange,
    ];

    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::FileOpen => "file:open",
            EventKind::FileSave => "file:save",
            EventKind::FileClose => "file:close",
            EventKind::FileChange => "file:change",
            EventKind::WorkspaceChange => "workspace:change",
            EventKind::ThemeChange => "theme:change",
            EventKind::SettingsChange => "settings:change",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
