//! Read-only application state exposed to plugins.
//!
//! The host hands plugins immutable snapshots of these types; mutation goes
//! through host capability calls, never through the snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A file known to the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Absolute path of the file.
    pub path: PathBuf,

    /// File name including extension.
    pub name: String,

    /// Extension without the leading dot.
    pub extension: String,

    /// Size in bytes.
    pub size: u64,

    /// Last modification time.
    pub modified: DateTime<Utc>,

    /// Current content of the file.
    pub content: String,
}

/// The open workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    /// Root path of the workspace.
    pub path: PathBuf,

    /// Display name of the workspace.
    pub name: String,

    /// Files in the workspace.
    pub files: Vec<FileInfo>,
}

/// Theme preference as configured by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the system theme.
    Auto,
}

/// Application-level editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub vim_mode: bool,
    pub show_line_numbers: bool,
    pub font_size: u16,
    pub font_family: String,
    pub theme: ThemePreference,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            vim_mode: false,
            show_line_numbers: true,
            font_size: 14,
            font_family: "monospace".to_string(),
            theme: ThemePreference::Auto,
        }
    }
}

/// The theme mode currently in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

/// The resolved theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeInfo {
    /// Effective mode after resolving an `auto` preference.
    pub mode: ThemeMode,

    /// Named colors of the active theme.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for ThemeInfo {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: HashMap::new(),
        }
    }
}

/// Snapshot of the application state at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// The file currently focused in the editor, if any.
    pub active_file: Option<FileInfo>,

    /// The open workspace.
    pub workspace: WorkspaceInfo,

    /// Application settings.
    pub settings: AppSettings,

    /// The resolved theme.
    pub theme: ThemeInfo,
}
