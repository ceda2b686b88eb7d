//! Preference storage configuration

use serde::Deserialize;

use crate::domain::foundation::UserId;

use super::error::ValidationError;

fn default_namespace() -> String {
    "prefs".to_string()
}

/// Configuration for the keyed blob store holding serialized
/// preferences.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Namespace prefixed to every storage key.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

impl StorageConfig {
    /// The storage key for one user's preferences.
    pub fn key_for(&self, user: &UserId) -> String {
        format!("{}:{}", self.namespace, user)
    }

    /// Validate the storage configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.namespace.trim().is_empty() {
            return Err(ValidationError::EmptyStorageNamespace);
        }
        if self.namespace.contains(':') {
            return Err(ValidationError::NamespaceContainsSeparator);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_namespace_is_prefs() {
        assert_eq!(StorageConfig::default().namespace, "prefs");
    }

    #[test]
    fn key_for_joins_namespace_and_user() {
        let config = StorageConfig::default();
        let user = UserId::new("user-123".to_string()).unwrap();
        assert_eq!(config.key_for(&user), "prefs:user-123");
    }

    #[test]
    fn validate_rejects_empty_namespace() {
        let config = StorageConfig {
            namespace: "  ".to_string(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::EmptyStorageNamespace)
        );
    }

    #[test]
    fn validate_rejects_separator_in_namespace() {
        let config = StorageConfig {
            namespace: "prefs:v2".to_string(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::NamespaceContainsSeparator)
        );
    }
}
