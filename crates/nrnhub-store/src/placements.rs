//! The singleton placements document.

use std::sync::Arc;

use nrnhub_ads::PlacementsPayload;

use crate::{KvStore, StoreError};

const PLACEMENTS_KEY: &str = "ads:placements";

/// Repository for the one placements document.
///
/// The document is created lazily: a missing key reads as an empty
/// payload without being persisted. Writes replace the whole document;
/// concurrent submissions are last-write-wins by contract.
pub struct PlacementsStore {
    kv: Arc<KvStore>,
}

impl PlacementsStore {
    /// Create a repository over a store handle.
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Load the current document, or an empty default when none exists.
    pub fn load(&self) -> Result<PlacementsPayload, StoreError> {
        Ok(self.kv.get(PLACEMENTS_KEY)?.unwrap_or_default())
    }

    /// Replace the whole document.
    pub fn replace(&self, payload: &PlacementsPayload) -> Result<(), StoreError> {
        self.kv.set(PLACEMENTS_KEY, payload)
    }

    /// Whether a document has ever been persisted.
    pub fn exists(&self) -> Result<bool, StoreError> {
        Ok(self.kv.get_raw(PLACEMENTS_KEY)?.is_some())
    }
}
