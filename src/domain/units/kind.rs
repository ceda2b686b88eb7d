//! Measurement kinds tracked by the profile and settings features.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A kind of measurement with exactly one canonical (metric) unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    Weight,
    Height,
    Temperature,
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Temperature => "temperature",
        };
        write!(f, "{}", s)
    }
}
