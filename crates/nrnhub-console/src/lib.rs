//! Management console support for the NRNHUB ad subsystem.
//!
//! [`ConsoleState`] is the in-memory mirror of the placements document
//! the admin edits against, with status flags for the most recent fetch
//! or submit. [`ApiClient`] performs the single-shot HTTP calls behind
//! those operations.

mod client;
mod state;

pub use client::{ApiClient, FetchError, MessageResponse, UploadResponse};
pub use state::{ConsoleState, SubmitReview};
