//! # markforge-plugin-api
//!
//! The plugin-facing surface of the markforge SDK.
//!
//! This crate provides the machinery a plugin runs on:
//!
//! - [`HostApi`] / [`EditorApi`] - the capability traits the application
//!   implements and hands to plugins
//! - [`PluginContext`] - the lifecycle controller that tracks every
//!   registration a plugin makes and tears them all down on unload
//! - [`Plugin`] - the lifecycle contract a plugin implements
//! - [`EventBridge`] - typed publish/subscribe over the closed
//!   [`AppEvent`](markforge_sdk_core::AppEvent) set
//! - [`SettingsBuilder`] - fluent construction of a settings schema
//! - [`PluginRegistry`] - host-side loading, enabling and unloading
//!
//! ## Registration Contract
//!
//! Every `add_*`/`register_*` call returns a
//! [`Disposer`](markforge_sdk_core::Disposer) that reverses exactly that
//! registration. The context keeps a clone of each disposer and runs them
//! in reverse registration order on unload; a plugin may also dispose
//! early, in which case the unload pass is a no-op for that handle.

pub mod bridge;
pub mod context;
pub mod editor;
pub mod host;
pub mod plugin;
pub mod registry;
pub mod settings;

pub use bridge::{EventBridge, EventHandler, SubscriptionId};
pub use context::PluginContext;
pub use editor::{ChangeHandler, CursorHandler, EditorApi, EditorExtension, SelectionHandler};
pub use host::{
    DialogFilter, HostApi, NotificationKind, OpenDialogOptions, SaveDialogOptions,
};
pub use plugin::Plugin;
pub use registry::{PluginInfo, PluginRegistry};
pub use settings::{
    FileOptions, GroupBuilder, NumberOptions, SettingsBuilder, SliderOptions, TextOptions,
    TextareaOptions,
};

// Re-exported for Plugin implementers.
pub use markforge_runtime::PluginManifest;

/// SDK version plugins compile against.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
