//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `VITALTRACK` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use vitaltrack_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod storage;
mod units;

pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;
pub use units::DefaultUnitsConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Display units for users without a stored preference.
    #[serde(default)]
    pub defaults: DefaultUnitsConfig,

    /// Preference blob store settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `VITALTRACK` prefix:
    ///
    /// - `VITALTRACK__DEFAULTS__WEIGHT=lbs` -> `defaults.weight = Lbs`
    /// - `VITALTRACK__STORAGE__NAMESPACE=prefs` -> `storage.namespace`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VITALTRACK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::units::{UnitPreference, WeightUnit};

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.defaults.as_preference(), UnitPreference::default());
    }

    #[test]
    fn deserializes_from_nested_structure() {
        let json = r#"{"defaults": {"weight": "lbs"}, "storage": {"namespace": "settings"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.defaults.weight, WeightUnit::Lbs);
        assert_eq!(config.storage.namespace, "settings");
    }
}
