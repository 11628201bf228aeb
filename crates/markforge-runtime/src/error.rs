//! Error types for the markforge plugin runtime.

use thiserror::Error;

/// Errors that can occur while loading and managing plugins.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Plugin not found by id or path.
    #[error("Plugin not found: {0}")]
    PluginNotFound(String),

    /// A plugin with the same id is already loaded.
    #[error("Plugin is already loaded: {0}")]
    PluginAlreadyLoaded(String),

    /// Failed to parse or validate a plugin manifest.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// Plugin failed to initialize.
    #[error("Plugin initialization failed: {0}")]
    InitializationFailed(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;
