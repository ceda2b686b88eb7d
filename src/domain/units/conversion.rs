//! Pure conversions between canonical (metric) values and display units.
//!
//! Canonical units are kg, cm, and celsius. Every conversion rounds the
//! way the product displays values: weight to one decimal place, height
//! to the nearest inch (as decimal feet) or nearest cm, temperature to
//! the nearest degree. Round-trips therefore recover the input within
//! rounding tolerance, not bit-exactly.
//!
//! # Preconditions
//!
//! Inputs must be finite. Callers are responsible for rejecting
//! non-numeric input before conversion; see the validation module.

use super::{HeightUnit, MeasurementKind, TemperatureUnit, UnitPreference, WeightUnit};

const KG_PER_LB: f64 = 2.20462;
const CM_PER_FOOT: f64 = 30.48;
const CM_PER_INCH: f64 = 2.54;

/// An immutable pair of pure conversion functions plus a unit label.
///
/// `from_display(to_display(x))` recovers `x` within the rounding
/// tolerance of the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRule {
    unit_label: &'static str,
    to_display: fn(f64) -> f64,
    from_display: fn(f64) -> f64,
}

impl ConversionRule {
    /// Label of the display unit this rule converts to.
    pub fn unit_label(&self) -> &'static str {
        self.unit_label
    }

    /// Converts a canonical value to the display unit.
    pub fn to_display(&self, canonical: f64) -> f64 {
        (self.to_display)(canonical)
    }

    /// Converts a display-unit value back to the canonical unit.
    pub fn from_display(&self, display: f64) -> f64 {
        (self.from_display)(display)
    }
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// Weight: canonical kg, displayed as kg or lbs, one decimal place.

fn kg_identity(kg: f64) -> f64 {
    round_1dp(kg)
}

fn kg_to_lbs(kg: f64) -> f64 {
    round_1dp(kg * KG_PER_LB)
}

fn lbs_to_kg(lbs: f64) -> f64 {
    round_1dp(lbs / KG_PER_LB)
}

// Height: canonical cm, displayed as whole cm or decimal feet where the
// fractional part encodes whole inches (5.75 = 5 ft 9 in).

fn cm_identity(cm: f64) -> f64 {
    cm.round()
}

fn cm_to_ft(cm: f64) -> f64 {
    let feet = (cm / CM_PER_FOOT).floor();
    let inches = ((cm % CM_PER_FOOT) / CM_PER_INCH).round();
    feet + inches / 12.0
}

fn ft_to_cm(ft: f64) -> f64 {
    let feet = ft.floor();
    let inches = ((ft - feet) * 12.0).round();
    (feet * CM_PER_FOOT + inches * CM_PER_INCH).round()
}

// Temperature: canonical celsius, displayed to the nearest degree.

fn celsius_identity(c: f64) -> f64 {
    c.round()
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    (c * 9.0 / 5.0 + 32.0).round()
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    ((f - 32.0) * 5.0 / 9.0).round()
}

impl WeightUnit {
    /// Conversion rule between canonical kg and this display unit.
    pub fn conversion(&self) -> ConversionRule {
        match self {
            Self::Kg => ConversionRule {
                unit_label: "kg",
                to_display: kg_identity,
                from_display: kg_identity,
            },
            Self::Lbs => ConversionRule {
                unit_label: "lbs",
                to_display: kg_to_lbs,
                from_display: lbs_to_kg,
            },
        }
    }
}

impl HeightUnit {
    /// Conversion rule between canonical cm and this display unit.
    pub fn conversion(&self) -> ConversionRule {
        match self {
            Self::Cm => ConversionRule {
                unit_label: "cm",
                to_display: cm_identity,
                from_display: cm_identity,
            },
            Self::Ft => ConversionRule {
                unit_label: "ft",
                to_display: cm_to_ft,
                from_display: ft_to_cm,
            },
        }
    }
}

impl TemperatureUnit {
    /// Conversion rule between canonical celsius and this display unit.
    pub fn conversion(&self) -> ConversionRule {
        match self {
            Self::Celsius => ConversionRule {
                unit_label: "celsius",
                to_display: celsius_identity,
                from_display: celsius_identity,
            },
            Self::Fahrenheit => ConversionRule {
                unit_label: "fahrenheit",
                to_display: celsius_to_fahrenheit,
                from_display: fahrenheit_to_celsius,
            },
        }
    }
}

/// Returns the conversion rule for a measurement kind under the given
/// preference.
pub fn conversion_for(kind: MeasurementKind, preference: &UnitPreference) -> ConversionRule {
    match kind {
        MeasurementKind::Weight => preference.weight.conversion(),
        MeasurementKind::Height => preference.height.conversion(),
        MeasurementKind::Temperature => preference.temperature.conversion(),
    }
}
