//! Plugin manifest parsing.
//!
//! Each plugin has a `manifest.toml` file that describes its identity,
//! requested permissions, and configuration. The manifest is read-only at
//! runtime.

use crate::error::{RuntimeError, RuntimeResult};
use crate::permission::{PermissionGrant, PermissionSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Plugin manifest structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Plugin metadata.
    pub plugin: PluginMetadata,

    /// Requested permissions.
    #[serde(default)]
    pub permissions: Vec<PermissionGrant>,

    /// Custom configuration key-value pairs.
    #[serde(default)]
    pub config: HashMap<String, toml::Value>,
}

/// Plugin metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Unique, stable identifier for the plugin.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Version string (semver).
    pub version: String,

    /// Plugin description.
    #[serde(default)]
    pub description: Option<String>,

    /// Plugin author.
    #[serde(default)]
    pub author: Option<String>,

    /// Minimum markforge version the plugin supports.
    #[serde(default)]
    pub min_app_version: Option<String>,

    /// Homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Repository URL.
    #[serde(default)]
    pub repository: Option<String>,

    /// Search keywords.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Entry point file (defaults to `plugin.wasm`).
    #[serde(default)]
    pub entry_point: Option<String>,
}

impl PluginManifest {
    /// Load a manifest from a TOML file.
    pub fn from_file(path: &Path) -> RuntimeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a manifest from a TOML string.
    pub fn from_toml(content: &str) -> RuntimeResult<Self> {
        let manifest: PluginManifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate the manifest.
    fn validate(&self) -> RuntimeResult<()> {
        if self.plugin.id.is_empty() {
            return Err(RuntimeError::InvalidManifest(
                "Plugin ID cannot be empty".to_string(),
            ));
        }

        if self.plugin.name.is_empty() {
            return Err(RuntimeError::InvalidManifest(
                "Plugin name cannot be empty".to_string(),
            ));
        }

        if self.plugin.version.is_empty() {
            return Err(RuntimeError::InvalidManifest(
                "Plugin version cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// All requested permissions, optional ones included.
    pub fn permission_set(&self) -> PermissionSet {
        self.permissions
            .iter()
            .map(|grant| grant.permission.clone())
            .collect()
    }

    /// Permissions the plugin cannot run without.
    pub fn required_permissions(&self) -> PermissionSet {
        self.permissions
            .iter()
            .filter(|grant| !grant.optional)
            .map(|grant| grant.permission.clone())
            .collect()
    }

    /// Get the entry point file name.
    pub fn entry_point(&self) -> &str {
        self.plugin.entry_point.as_deref().unwrap_or("plugin.wasm")
    }
}
