//! In-memory preference blob store adapter.
//!
//! Useful for testing and development; production deployments wire the
//! real keyed blob store behind the same port.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::ports::{PreferenceStorage, PreferenceStorageError};

/// In-memory implementation of [`PreferenceStorage`].
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStorage {
    blobs: RwLock<HashMap<String, String>>,
}

impl InMemoryPreferenceStorage {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a blob, as if a previous session had written it.
    pub fn seed(&self, key: impl Into<String>, blob: impl Into<String>) {
        self.blobs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), blob.into());
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferenceStorage for InMemoryPreferenceStorage {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceStorageError> {
        Ok(self
            .blobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), PreferenceStorageError> {
        self.blobs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
