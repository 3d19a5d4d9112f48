//! Error types for agroheat

use thiserror::Error;

/// Main error type for agroheat operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown tier: {0:?} (expected low, medium or high)")]
    UnknownTier(String),

    #[error("Unknown metric: {0:?}")]
    UnknownMetric(String),

    #[error("Grid size mismatch: expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Algorithm error: {0}")]
    Algorithm(String),
}

impl Error {
    /// True for errors caused by caller-supplied configuration rather than
    /// by data or I/O.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownTier(_) | Error::UnknownMetric(_) | Error::InvalidParameter { .. }
        )
    }
}

/// Result type alias for agroheat operations
pub type Result<T> = std::result::Result<T, Error>;
