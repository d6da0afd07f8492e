//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing store.
    #[error("failed to open store: {0}")]
    OpenError(String),

    /// Failed to read or write a key.
    #[error("store operation failed: {0}")]
    StoreOp(String),

    /// Stored value could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Unsupported media type on upload.
    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}
