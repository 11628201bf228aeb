//! # markforge-runtime
//!
//! Plugin manifest parsing and discovery for markforge.
//!
//! This crate provides:
//! - Plugin discovery from well-known paths
//! - Plugin manifest parsing
//! - The permission model plugins declare against
//!
//! ## Plugin Structure
//!
//! Plugins are directories containing:
//! - `manifest.toml` - Plugin metadata and requested permissions
//! - The entry point named by the manifest (default `plugin.wasm`)
//!
//! Instantiating plugin code from the entry point is the host
//! application's concern; this crate stops at metadata.
//!
//! ## Permission Model
//!
//! Plugins declare the permissions they need in their manifest. The host
//! checks declared permissions before exposing the matching capabilities.

pub mod discovery;
pub mod error;
pub mod manifest;
pub mod permission;

pub use discovery::{discover_plugin, discover_plugins, PluginPath};
pub use error::{RuntimeError, RuntimeResult};
pub use manifest::{PluginManifest, PluginMetadata};
pub use permission::{Permission, PermissionGrant, PermissionSet};
