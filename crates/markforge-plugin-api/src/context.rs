//! The plugin lifecycle controller.
//!
//! A [`PluginContext`] mediates between one plugin and the host capability
//! surface. Every side-effecting registration the plugin makes during its
//! active lifetime goes through the context, which keeps a clone of the
//! returned disposer; `unload` then reverses everything in reverse
//! registration order, exactly once.
//!
//! The context is handed to the plugin explicitly (constructed by the
//! registry, bound to the host, passed into `on_load`); there is no
//! ambient global to resolve it from.

use crate::bridge::EventHandler;
use crate::editor::EditorExtension;
use crate::host::{HostApi, NotificationKind};
use markforge_sdk_core::{
    AppEvent, Command, Disposer, EventKind, KeyboardShortcut, MenuItem, MenuLocation,
    PluginSettings, PluginSettingsConfig, SdkError, SdkResult, StatusBarItem,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Lifecycle controller for one plugin instance.
///
/// Tracks every registration made through it and guarantees teardown in
/// reverse registration order on [`unload`](PluginContext::unload). Also
/// holds the last-loaded settings snapshot for synchronous access.
pub struct PluginContext {
    plugin_id: String,
    host: Option<Arc<dyn HostApi>>,
    disposers: Vec<Disposer>,
    settings: PluginSettings,
}

impl PluginContext {
    /// Create an unbound controller for the given plugin id.
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            host: None,
            disposers: Vec::new(),
            settings: PluginSettings::new(),
        }
    }

    /// Bind the controller to the host capability surface.
    ///
    /// Must be called exactly once, before any registration helper. A
    /// second call fails with [`SdkError::AlreadyInitialized`]: silently
    /// rebinding would orphan disposers created against the first host.
    pub fn initialize(&mut self, host: Arc<dyn HostApi>) -> SdkResult<()> {
        if self.host.is_some() {
            return Err(SdkError::AlreadyInitialized);
        }
        debug!(plugin = %self.plugin_id, "Bound plugin context to host");
        self.host = Some(host);
        Ok(())
    }

    /// Whether `initialize` has been called.
    pub fn is_initialized(&self) -> bool {
        self.host.is_some()
    }

    /// The plugin id this controller belongs to.
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// The bound host, for calls that need no disposer tracking.
    pub fn host(&self) -> SdkResult<Arc<dyn HostApi>> {
        self.host.clone().ok_or(SdkError::Uninitialized)
    }

    fn track(&mut self, disposer: Disposer) -> Disposer {
        self.disposers.push(disposer.clone());
        disposer
    }

    // Registration helpers. Each forwards to the host, keeps a clone of the
    // disposer for unload, and returns it so the plugin may dispose early.

    pub fn add_command(&mut self, command: Command) -> SdkResult<Disposer> {
        let disposer = self.host()?.add_command(command);
        Ok(self.track(disposer))
    }

    pub fn add_keyboard_shortcut(&mut self, shortcut: KeyboardShortcut) -> SdkResult<Disposer> {
        let disposer = self.host()?.add_keyboard_shortcut(shortcut);
        Ok(self.track(disposer))
    }

    pub fn add_menu_item(&mut self, location: MenuLocation, item: MenuItem) -> SdkResult<Disposer> {
        let disposer = self.host()?.add_menu_item(location, item);
        Ok(self.track(disposer))
    }

    pub fn add_status_bar_item(&mut self, item: StatusBarItem) -> SdkResult<Disposer> {
        let disposer = self.host()?.add_status_bar_item(item);
        Ok(self.track(disposer))
    }

    pub fn add_editor_extension(
        &mut self,
        extension: Arc<dyn EditorExtension>,
    ) -> SdkResult<Disposer> {
        let disposer = self.host()?.add_editor_extension(extension);
        Ok(self.track(disposer))
    }

    /// Subscribe to one application event kind.
    pub fn add_event_listener<F>(&mut self, kind: EventKind, handler: F) -> SdkResult<Disposer>
    where
        F: Fn(&AppEvent) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let handler: EventHandler = Arc::new(handler);
        let disposer = self.host()?.on(kind, handler);
        Ok(self.track(disposer))
    }

    /// Register this plugin's settings schema.
    pub fn register_settings(&mut self, config: PluginSettingsConfig) -> SdkResult<Disposer> {
        let disposer = self.host()?.register_settings(&self.plugin_id, config);
        Ok(self.track(disposer))
    }

    /// Number of currently tracked registrations.
    pub fn tracked_count(&self) -> usize {
        self.disposers.len()
    }

    /// Tear down every tracked registration, last registered first, then
    /// clear the list.
    ///
    /// Reverse order keeps later registrations from dangling on resources
    /// their predecessors still reference. Safe with zero registrations;
    /// a second call is a no-op.
    pub fn unload(&mut self) {
        if self.disposers.is_empty() {
            return;
        }

        debug!(
            plugin = %self.plugin_id,
            count = self.disposers.len(),
            "Disposing tracked registrations"
        );

        for disposer in self.disposers.drain(..).rev() {
            disposer.dispose();
        }
    }

    // Settings. `load_settings`/`save_settings` talk to the host; the
    // typed accessors below are synchronous against the loaded snapshot.

    /// Fetch this plugin's persisted settings from the host and retain
    /// them as the current snapshot. An empty mapping when nothing is
    /// stored; host failures propagate unchanged.
    pub async fn load_settings(&mut self) -> SdkResult<PluginSettings> {
        let host = self.host()?;
        let loaded = host.load_settings(&self.plugin_id).await?;
        self.settings = loaded.clone();
        Ok(loaded)
    }

    /// Persist a settings snapshot through the host and retain it.
    pub async fn save_settings(&mut self, settings: PluginSettings) -> SdkResult<()> {
        let host = self.host()?;
        host.save_settings(&self.plugin_id, &settings).await?;
        self.settings = settings;
        Ok(())
    }

    /// Typed setting from the snapshot.
    pub fn setting<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.settings.get_as(key)
    }

    /// Typed setting with a fallback: the loaded value wins when present,
    /// the caller's default fills the gap.
    pub fn setting_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.settings.get_or(key, default)
    }

    /// Update the snapshot. Does not persist; call
    /// [`save_settings`](PluginContext::save_settings) for that.
    pub fn set_setting<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> SdkResult<()> {
        self.settings.set(key, value)
    }

    /// The current settings snapshot.
    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    // Untracked utility pass-throughs.

    pub fn show_notification(&self, message: &str, kind: NotificationKind) -> SdkResult<()> {
        self.host()?.show_notification(message, kind);
        Ok(())
    }

    pub fn show_toast(&self, message: &str, duration: Option<std::time::Duration>) -> SdkResult<()> {
        self.host()?.show_toast(message, duration);
        Ok(())
    }

    pub async fn show_confirm(&self, title: &str, message: &str) -> SdkResult<bool> {
        self.host()?.show_confirm(title, message).await
    }

    pub async fn show_prompt(
        &self,
        title: &str,
        message: &str,
        default_value: Option<&str>,
    ) -> SdkResult<Option<String>> {
        self.host()?.show_prompt(title, message, default_value).await
    }
}

impl std::fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginContext")
            .field("plugin_id", &self.plugin_id)
            .field("initialized", &self.is_initialized())
            .field("tracked", &self.disposers.len())
            .finish()
    }
}
