//! Plugin registry for managing loaded plugins.
//!
//! The registry owns the host handle, binds a [`PluginContext`] to each
//! plugin it loads, drives the lifecycle hooks, and guarantees that a
//! plugin's tracked registrations are torn down on unload even when the
//! plugin's own hook fails.

use crate::context::PluginContext;
use crate::host::HostApi;
use crate::plugin::Plugin;
use markforge_runtime::{RuntimeError, RuntimeResult};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{info, warn};

struct PluginEntry {
    plugin: Box<dyn Plugin>,
    context: PluginContext,
}

/// Registry for managing markforge plugins.
pub struct PluginRegistry {
    host: Arc<dyn HostApi>,

    /// Loaded plugins by id.
    plugins: HashMap<String, PluginEntry>,

    /// Disabled plugin ids.
    disabled: HashSet<String>,
}

impl PluginRegistry {
    /// Create an empty registry bound to a host.
    pub fn new(host: Arc<dyn HostApi>) -> Self {
        Self {
            host,
            plugins: HashMap::new(),
            disabled: HashSet::new(),
        }
    }

    /// Load a plugin: bind a context, run `on_load`, and start tracking it.
    ///
    /// A failing `on_load` tears down whatever the plugin registered
    /// before failing, and the plugin is not retained.
    pub async fn load_plugin(&mut self, mut plugin: Box<dyn Plugin>) -> RuntimeResult<String> {
        let id = plugin.manifest().plugin.id.clone();
        let version = plugin.manifest().plugin.version.clone();

        if self.plugins.contains_key(&id) {
            return Err(RuntimeError::PluginAlreadyLoaded(id));
        }

        let mut context = PluginContext::new(&id);
        context
            .initialize(Arc::clone(&self.host))
            .map_err(|e| RuntimeError::InitializationFailed(e.to_string()))?;

        if let Err(e) = plugin.on_load(&mut context).await {
            warn!(plugin = %id, error = %e, "on_load failed, rolling back registrations");
            context.unload();
            return Err(RuntimeError::InitializationFailed(e.to_string()));
        }

        info!(plugin = %id, version = %version, "Loaded plugin");
        self.plugins.insert(id.clone(), PluginEntry { plugin, context });
        Ok(id)
    }

    /// Unload a plugin by id.
    ///
    /// Runs `on_unload`, then disposes every tracked registration in
    /// reverse registration order. A failing hook is logged and does not
    /// skip the teardown.
    pub async fn unload_plugin(&mut self, id: &str) -> RuntimeResult<()> {
        let mut entry = self
            .plugins
            .remove(id)
            .ok_or_else(|| RuntimeError::PluginNotFound(id.to_string()))?;

        if let Err(e) = entry.plugin.on_unload(&mut entry.context).await {
            warn!(plugin = %id, error = %e, "on_unload failed");
        }
        entry.context.unload();
        self.disabled.remove(id);

        info!(plugin = %id, "Unloaded plugin");
        Ok(())
    }

    /// Enable a plugin, running `on_enable` if it was disabled.
    pub async fn enable_plugin(&mut self, id: &str) -> RuntimeResult<()> {
        let entry = self
            .plugins
            .get_mut(id)
            .ok_or_else(|| RuntimeError::PluginNotFound(id.to_string()))?;

        if self.disabled.remove(id) {
            entry
                .plugin
                .on_enable()
                .await
                .map_err(|e| RuntimeError::InitializationFailed(e.to_string()))?;
            info!(plugin = %id, "Enabled plugin");
        }
        Ok(())
    }

    /// Disable a plugin without unloading it, running `on_disable` if it
    /// was enabled.
    pub async fn disable_plugin(&mut self, id: &str) -> RuntimeResult<()> {
        let entry = self
            .plugins
            .get_mut(id)
            .ok_or_else(|| RuntimeError::PluginNotFound(id.to_string()))?;

        if self.disabled.insert(id.to_string()) {
            if let Err(e) = entry.plugin.on_disable().await {
                warn!(plugin = %id, error = %e, "on_disable failed");
            }
            info!(plugin = %id, "Disabled plugin");
        }
        Ok(())
    }

    /// Check if a plugin is loaded and enabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.plugins.contains_key(id) && !self.disabled.contains(id)
    }

    /// Check if a plugin is loaded.
    pub fn contains(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    /// The manifest of a loaded plugin.
    pub fn manifest(&self, id: &str) -> Option<&markforge_runtime::PluginManifest> {
        self.plugins.get(id).map(|entry| entry.plugin.manifest())
    }

    /// Get all loaded plugin ids.
    pub fn plugin_ids(&self) -> Vec<String> {
        self.plugins.keys().cloned().collect()
    }

    /// Get the number of loaded plugins.
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// List plugin information.
    pub fn list_plugins(&self) -> Vec<PluginInfo> {
        self.plugins
            .values()
            .map(|entry| {
                let metadata = &entry.plugin.manifest().plugin;
                PluginInfo {
                    id: metadata.id.clone(),
                    name: metadata.name.clone(),
                    version: metadata.version.clone(),
                    author: metadata.author.clone(),
                    enabled: !self.disabled.contains(&metadata.id),
                }
            })
            .collect()
    }
}

/// Information about a loaded plugin.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    pub author: Option<String>,
    pub enabled: bool,
}
