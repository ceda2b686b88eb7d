//! Default display-unit configuration

use serde::Deserialize;

use crate::domain::units::{HeightUnit, TemperatureUnit, UnitPreference, WeightUnit};

/// Display units used for a user who has not chosen any yet.
///
/// Defaults to the canonical metric units.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultUnitsConfig {
    #[serde(default)]
    pub weight: WeightUnit,

    #[serde(default)]
    pub height: HeightUnit,

    #[serde(default)]
    pub temperature: TemperatureUnit,
}

impl DefaultUnitsConfig {
    /// The configured defaults as a preference value.
    pub fn as_preference(&self) -> UnitPreference {
        UnitPreference {
            weight: self.weight,
            height: self.height,
            temperature: self.temperature,
        }
    }
}
