//! Error types.
//!
//! The scheduling engine itself cannot fail; only the storage layer
//! surfaces errors.

use thiserror::Error;

/// Storage layer error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid store key '{0}'")]
    InvalidKey(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored timetable is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
