//! PreferenceStorage port - keyed blob store for serialized preferences.
//!
//! Synchronous on purpose: preference updates must be fully persisted
//! and observers notified before the triggering UI event handler
//! returns, so there is no window where stale bounds are displayed.

use thiserror::Error;

/// Failure raised by the preference blob store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreferenceStorageError {
    #[error("Failed to read preferences under '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Failed to write preferences under '{key}': {reason}")]
    WriteFailed { key: String, reason: String },
}

/// Port for durable keyed-blob preference storage.
pub trait PreferenceStorage: Send + Sync {
    /// Loads the blob stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceStorageError>;

    /// Writes the blob under `key`, replacing any previous value.
    fn save(&self, key: &str, blob: &str) -> Result<(), PreferenceStorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn PreferenceStorage) {}

    #[test]
    fn errors_name_the_key() {
        let err = PreferenceStorageError::WriteFailed {
            key: "prefs:user-1".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Failed to write preferences under 'prefs:user-1': disk full"
        );
    }
}
