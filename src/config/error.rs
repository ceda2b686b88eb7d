//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Preference storage namespace must not be empty")]
    EmptyStorageNamespace,

    #[error("Preference storage namespace must not contain ':'")]
    NamespaceContainsSeparator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_their_reason() {
        assert_eq!(
            format!("{}", ValidationError::EmptyStorageNamespace),
            "Preference storage namespace must not be empty"
        );
    }
}
