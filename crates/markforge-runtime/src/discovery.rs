//! Plugin discovery from well-known paths.
//!
//! Plugins are discovered from the following locations (in order):
//!
//! 1. The per-user plugins directory (`<data dir>/markforge/plugins/`)
//! 2. Each entry of the `MARKFORGE_PLUGIN_PATH` environment variable
//!
//! Each plugin is a directory containing a `manifest.toml` file. When two
//! locations provide the same plugin id, the earlier location wins.

use crate::error::RuntimeResult;
use crate::manifest::PluginManifest;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Information about a discovered plugin.
#[derive(Debug, Clone)]
pub struct PluginPath {
    /// Path to the plugin directory.
    pub path: PathBuf,

    /// Parsed manifest.
    pub manifest: PluginManifest,

    /// Whether the plugin is enabled.
    pub enabled: bool,
}

impl PluginPath {
    /// Get the plugin ID.
    pub fn id(&self) -> &str {
        &self.manifest.plugin.id
    }

    /// Get the plugin name.
    pub fn name(&self) -> &str {
        &self.manifest.plugin.name
    }

    /// Get the plugin version.
    pub fn version(&self) -> &str {
        &self.manifest.plugin.version
    }

    /// Get the path to the entry point file.
    pub fn entry_point_path(&self) -> PathBuf {
        self.path.join(self.manifest.entry_point())
    }

    /// Check if the entry point file exists.
    pub fn has_entry_point(&self) -> bool {
        self.entry_point_path().exists()
    }
}

/// Get the per-user plugins directory.
pub fn user_plugins_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "markforge", "markforge")
        .map(|dirs| dirs.data_dir().join("plugins"))
}

/// Get additional plugin directories from `MARKFORGE_PLUGIN_PATH`.
pub fn extra_plugins_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(path_list) = std::env::var("MARKFORGE_PLUGIN_PATH") {
        for dir in path_list.split(':').filter(|d| !d.is_empty()) {
            let path = PathBuf::from(dir);
            if path.exists() && !dirs.contains(&path) {
                dirs.push(path);
            }
        }
    }

    dirs
}

/// Discover all plugins from well-known paths.
pub fn discover_plugins() -> RuntimeResult<Vec<PluginPath>> {
    let mut plugins = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    // User plugins have priority
    if let Some(user_dir) = user_plugins_dir() {
        debug!("Scanning user plugins directory: {:?}", user_dir);
        discover_in_directory(&user_dir, &mut plugins, &mut seen_ids)?;
    }

    for extra_dir in extra_plugins_dirs() {
        debug!("Scanning extra plugins directory: {:?}", extra_dir);
        discover_in_directory(&extra_dir, &mut plugins, &mut seen_ids)?;
    }

    info!("Discovered {} plugins", plugins.len());
    Ok(plugins)
}

/// Discover plugins in a specific directory.
pub fn discover_in_directory(
    dir: &Path,
    plugins: &mut Vec<PluginPath>,
    seen_ids: &mut std::collections::HashSet<String>,
) -> RuntimeResult<()> {
    if !dir.exists() {
        return Ok(());
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!("Failed to read plugins directory {:?}: {}", dir, e);
            return Ok(());
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        let manifest_path = path.join("manifest.toml");
        if !manifest_path.exists() {
            debug!("Skipping {:?}: no manifest.toml", path);
            continue;
        }

        match PluginManifest::from_file(&manifest_path) {
            Ok(manifest) => {
                let id = manifest.plugin.id.clone();

                // Earlier directories take priority for duplicate ids
                if seen_ids.contains(&id) {
                    debug!("Skipping duplicate plugin: {}", id);
                    continue;
                }

                info!(
                    "Discovered plugin: {} v{} at {:?}",
                    manifest.plugin.name, manifest.plugin.version, path
                );

                seen_ids.insert(id);
                plugins.push(PluginPath {
                    path,
                    manifest,
                    enabled: true,
                });
            }
            Err(e) => {
                warn!("Failed to load manifest from {:?}: {}", manifest_path, e);
            }
        }
    }

    Ok(())
}

/// Discover a single plugin from a path.
pub fn discover_plugin(path: &Path) -> RuntimeResult<PluginPath> {
    let manifest_path = path.join("manifest.toml");
    let manifest = PluginManifest::from_file(&manifest_path)?;

    Ok(PluginPath {
        path: path.to_path_buf(),
        manifest,
        enabled: true,
    })
}
