//! Units module - Measurement kinds, display units, and conversions.
//!
//! Data is persisted in canonical metric units; the user edits values in
//! their chosen display units. This module owns both vocabularies and
//! the pure arithmetic between them.

mod conversion;
mod display;
mod kind;
mod preference;

pub use conversion::{conversion_for, ConversionRule};
pub use display::{HeightUnit, TemperatureUnit, WeightUnit};
pub use kind::MeasurementKind;
pub use preference::{UnitPreference, UnitPreferenceUpdate};
