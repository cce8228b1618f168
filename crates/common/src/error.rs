//! Error types shared across EdgeFollow crates.

use std::path::PathBuf;

/// Top-level error type for EdgeFollow operations.
#[derive(Debug, thiserror::Error)]
pub enum EdgeFollowError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A pointer move arrived without an entry edge on record.
    #[error("Protocol violation: {message}")]
    ProtocolViolation { message: String },

    #[error("Trace error: {message}")]
    Trace { message: String },

    #[error("Background task failed: {message}")]
    Task { message: String },

    #[error("Background task was cancelled")]
    Cancelled,

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using EdgeFollowError.
pub type EdgeFollowResult<T> = Result<T, EdgeFollowError>;

impl EdgeFollowError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn protocol_violation(msg: impl Into<String>) -> Self {
        Self::ProtocolViolation {
            message: msg.into(),
        }
    }

    pub fn trace(msg: impl Into<String>) -> Self {
        Self::Trace {
            message: msg.into(),
        }
    }

    pub fn task(msg: impl Into<String>) -> Self {
        Self::Task {
            message: msg.into(),
        }
    }

    /// Whether this error came from a cooperative cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
