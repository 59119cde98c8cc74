//! Error types for focusflow.

use thiserror::Error;

/// Errors that can occur in focusflow.
#[derive(Debug, Error)]
pub enum FocusError {
    /// Settings failed validation and were not persisted.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// The persistence layer is unavailable or a read/write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A desktop notification could not be delivered.
    #[error("Notification error: {0}")]
    Notification(String),

    /// Configuration or environment problem (paths, config file, terminal).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
