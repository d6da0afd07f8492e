//! Append-only inquiry storage.

use std::sync::Arc;

use nrnhub_ads::AdInquiry;

use crate::{KvStore, StoreError};

const INQUIRY_PREFIX: &str = "inquiry:";

/// Repository for advertiser inquiries.
///
/// Keys embed a zero-padded creation timestamp so a descending key sort
/// yields newest-first listing. Records are never updated or deleted.
pub struct InquiryStore {
    kv: Arc<KvStore>,
}

impl InquiryStore {
    /// Create a repository over a store handle.
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Append an inquiry.
    pub fn append(&self, inquiry: &AdInquiry) -> Result<(), StoreError> {
        let key = format!(
            "{}{:020}:{}",
            INQUIRY_PREFIX,
            inquiry.created_at.max(0),
            inquiry.id
        );
        self.kv.set(&key, inquiry)
    }

    /// List inquiries newest-first, with paging.
    pub fn list(&self, limit: usize, offset: usize) -> Result<Vec<AdInquiry>, StoreError> {
        let mut keys = self.kv.keys_with_prefix(INQUIRY_PREFIX)?;
        keys.sort_unstable_by(|a, b| b.cmp(a));

        keys.into_iter()
            .skip(offset)
            .take(limit)
            .filter_map(|key| self.kv.get::<AdInquiry>(&key).transpose())
            .collect()
    }

    /// Total number of stored inquiries.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.kv.keys_with_prefix(INQUIRY_PREFIX)?.len())
    }
}
