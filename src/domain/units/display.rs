//! Display-unit enums, one per measurement kind.
//!
//! The canonical unit of each kind is always available as a display
//! choice; the remaining variants are the imperial alternatives the
//! settings screen offers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display unit for weight. Canonical: kg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Short label shown next to the input field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display unit for height. Canonical: cm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Cm,
    Ft,
}

impl HeightUnit {
    /// Short label shown next to the input field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Ft => "ft",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display unit for temperature. Canonical: celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Short label shown next to the input field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_canonical() {
        assert_eq!(WeightUnit::default(), WeightUnit::Kg);
        assert_eq!(HeightUnit::default(), HeightUnit::Cm);
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&WeightUnit::Lbs).unwrap(), "\"lbs\"");
        assert_eq!(serde_json::to_string(&HeightUnit::Ft).unwrap(), "\"ft\"");
        assert_eq!(
            serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap(),
            "\"fahrenheit\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let unit: WeightUnit = serde_json::from_str("\"kg\"").unwrap();
        assert_eq!(unit, WeightUnit::Kg);
        let unit: HeightUnit = serde_json::from_str("\"ft\"").unwrap();
        assert_eq!(unit, HeightUnit::Ft);
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(format!("{}", WeightUnit::Lbs), "lbs");
        assert_eq!(format!("{}", TemperatureUnit::Celsius), "celsius");
    }
}
