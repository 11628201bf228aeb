//! # markforge-sdk-core
//!
//! Core types shared across the markforge plugin SDK.
//!
//! This crate defines the data surface a plugin compiles against:
//!
//! - [`AppState`] and its parts - the read-only application snapshot
//! - [`AppEvent`] / [`EventKind`] - the closed set of application events
//! - Registration entities - [`Command`], [`KeyboardShortcut`], [`MenuItem`],
//!   [`StatusBarItem`]
//! - Setting schema types - [`SettingDefinition`], [`SettingGroup`],
//!   [`PluginSettingsConfig`] - and the [`PluginSettings`] value map
//! - [`Disposer`] - the idempotent teardown handle every registration returns
//!
//! No behavior beyond the types themselves lives here; the lifecycle
//! machinery is in `markforge-plugin-api`.

pub mod disposer;
pub mod editor;
pub mod error;
pub mod event;
pub mod registration;
pub mod settings;
pub mod state;

pub use disposer::Disposer;
pub use editor::{
    EditorPosition, EditorRange, EditorSelection, FindOptions, MarkdownFormat, MarkdownOptions,
};
pub use error::{SdkError, SdkResult};
pub use event::{AppEvent, EventKind};
pub use registration::{
    ClickHandler, Command, CommandAction, ConditionFn, KeyboardShortcut, MenuItem, MenuLocation,
    StatusBarItem,
};
pub use settings::{
    DropdownOption, PluginSettings, PluginSettingsConfig, SettingDefinition, SettingGroup,
};
pub use state::{
    AppSettings, AppState, FileInfo, ThemeInfo, ThemeMode, ThemePreference, WorkspaceInfo,
};

/// Convenience re-exports for plugin authors.
pub mod prelude {
    pub use crate::disposer::Disposer;
    pub use crate::error::{SdkError, SdkResult};
    pub use crate::event::{AppEvent, EventKind};
    pub use crate::registration::{Command, KeyboardShortcut, MenuItem, MenuLocation, StatusBarItem};
    pub use crate::settings::{PluginSettings, PluginSettingsConfig};
    pub use crate::state::{AppState, FileInfo};
}
