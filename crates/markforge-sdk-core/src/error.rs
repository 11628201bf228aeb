//! Error types for the plugin SDK surface.

use thiserror::Error;

/// Errors surfaced to plugins by the SDK.
#[derive(Error, Debug)]
pub enum SdkError {
    /// A registration helper was called before the controller was bound to a host.
    #[error("Plugin context is not initialized")]
    Uninitialized,

    /// The controller was bound to a host twice.
    #[error("Plugin context is already initialized")]
    AlreadyInitialized,

    /// A host capability call failed. Propagated unchanged; the SDK never retries.
    #[error("Host operation failed: {0}")]
    Host(String),

    /// A plugin-authored callback failed.
    #[error("Handler failed: {0}")]
    Handler(String),

    /// Setting value serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for SDK operations.
pub type SdkResult<T> = std::result::Result<T, SdkError>;
