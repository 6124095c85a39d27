//! Error types for the fieldvec data model.

use thiserror::Error;

/// Errors raised while building or (de)serializing data model values.
#[derive(Error, Debug)]
pub enum DataError {
    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// An array was declared with zero components per tuple.
    #[error("invalid component count: {0}")]
    InvalidComponentCount(usize),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for data model operations.
pub type Result<T> = std::result::Result<T, DataError>;
