//! Ad domain error types.

use thiserror::Error;

/// Errors that can occur in ad placement and inquiry operations.
#[derive(Error, Debug)]
pub enum AdsError {
    /// A required field is missing or malformed. Recoverable by the
    /// caller correcting input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A slot name outside the known catalog.
    #[error("unknown ad slot: {0}")]
    UnknownSlot(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AdsError {
    fn from(e: serde_json::Error) -> Self {
        AdsError::Serialization(e.to_string())
    }
}
