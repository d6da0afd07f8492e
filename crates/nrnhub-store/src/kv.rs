//! Key-value store wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// Type-safe store backed by Spin's Key-Value Store on wasm32 and an
/// in-memory map natively.
pub struct KvStore {
    #[cfg(target_arch = "wasm32")]
    store: spin_sdk::key_value::Store,
    #[cfg(not(target_arch = "wasm32"))]
    entries: std::sync::RwLock<std::collections::BTreeMap<String, Vec<u8>>>,
}

#[cfg(target_arch = "wasm32")]
impl KvStore {
    /// Open the default Key-Value store.
    pub fn open_default() -> Result<Self, StoreError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| StoreError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Get raw bytes for a key.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.store
            .get(key)
            .map_err(|e| StoreError::StoreOp(e.to_string()))
    }

    /// Set raw bytes for a key.
    pub fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.store
            .set(key, value)
            .map_err(|e| StoreError::StoreOp(e.to_string()))
    }

    /// Delete a key.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store
            .delete(key)
            .map_err(|e| StoreError::StoreOp(e.to_string()))
    }

    /// All keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.store
            .get_keys()
            .map_err(|e| StoreError::StoreOp(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KvStore {
    /// Open a fresh in-memory store.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self {
            entries: std::sync::RwLock::new(std::collections::BTreeMap::new()),
        })
    }

    /// Get raw bytes for a key.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::StoreOp(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    /// Set raw bytes for a key.
    pub fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::StoreOp(e.to_string()))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    /// Delete a key.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::StoreOp(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }

    /// All keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::StoreOp(e.to_string()))?;
        Ok(entries.keys().cloned().collect())
    }
}

impl KvStore {
    /// Get a JSON-decoded value.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a JSON-encoded value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }

    /// Keys beginning with a prefix.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .keys()?
            .into_iter()
            .filter(|k| k.starts_with(prefix))
            .collect())
    }
}
