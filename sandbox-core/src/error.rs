//! Error types for sandbox operations.
//!
//! The core has no fatal path: invalid conditions are represented as data
//! states (placeholder comments, no-op mutations). These variants exist for
//! boundary refusals the host must be told about.

use thiserror::Error;

/// Result type for sandbox operations.
pub type SandboxResult<T> = Result<T, SandboxError>;

/// Errors that can occur at the sandbox boundary.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// Element not found in the store.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// The current CSS text is a placeholder and must not reach the clipboard.
    #[error("Nothing to copy: current text is a placeholder")]
    NothingToCopy,

    /// Serialization error when shuttling state to the host.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
