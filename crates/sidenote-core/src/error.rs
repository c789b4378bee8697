//! Error types for the Sidenote core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Sidenote.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Site manifest loading or parsing error.
    #[error("Manifest error: {message}")]
    Manifest { message: String },

    /// Unrecognized theme mode string.
    #[error("Unknown theme mode: {0}")]
    Theme(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a new manifest error with a message.
    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            message: message.into(),
        }
    }
}
