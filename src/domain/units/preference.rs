//! Unit preference value object and its partial-update form.

use serde::{Deserialize, Serialize};

use super::{HeightUnit, TemperatureUnit, WeightUnit};

/// The display units a user has chosen, one per measurement kind.
///
/// Persisted across sessions as a serialized blob; mutated only through
/// `PreferenceStore::update`. Defaults to the canonical metric units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UnitPreference {
    pub weight: WeightUnit,
    pub height: HeightUnit,
    pub temperature: TemperatureUnit,
}

impl UnitPreference {
    /// Returns a copy with the update's provided keys replaced.
    pub fn merged(&self, update: &UnitPreferenceUpdate) -> Self {
        Self {
            weight: update.weight.unwrap_or(self.weight),
            height: update.height.unwrap_or(self.height),
            temperature: update.temperature.unwrap_or(self.temperature),
        }
    }
}

/// Partial update to a `UnitPreference`; `None` keys are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitPreferenceUpdate {
    pub weight: Option<WeightUnit>,
    pub height: Option<HeightUnit>,
    pub temperature: Option<TemperatureUnit>,
}

impl UnitPreferenceUpdate {
    /// Update only the weight unit.
    pub fn weight(unit: WeightUnit) -> Self {
        Self {
            weight: Some(unit),
            ..Self::default()
        }
    }

    /// Update only the height unit.
    pub fn height(unit: HeightUnit) -> Self {
        Self {
            height: Some(unit),
            ..Self::default()
        }
    }

    /// Update only the temperature unit.
    pub fn temperature(unit: TemperatureUnit) -> Self {
        Self {
            temperature: Some(unit),
            ..Self::default()
        }
    }

    /// Returns true if no key is provided.
    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.height.is_none() && self.temperature.is_none()
    }
}
