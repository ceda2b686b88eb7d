//! Dynamic validation schema built from the current unit preference.
//!
//! Numeric bounds for height and weight are expressed and enforced in
//! the selected display unit, so the schema must be rebuilt whenever the
//! preference changes. Building is a pure function of the preference:
//! equal preferences produce structurally equal schemas.

use std::collections::BTreeMap;

use crate::domain::profile::{Gender, ProfileDraft, ProfileField};
use crate::domain::units::{HeightUnit, UnitPreference, WeightUnit};

use super::{FieldErrors, RuleKind, ValidationRule};

/// Inclusive height bounds per display unit.
const HEIGHT_BOUNDS_CM: (f64, f64) = (50.0, 300.0);
const HEIGHT_BOUNDS_FT: (f64, f64) = (1.5, 10.0);

/// Inclusive weight bounds per display unit.
const WEIGHT_BOUNDS_KG: (f64, f64) = (20.0, 300.0);
const WEIGHT_BOUNDS_LBS: (f64, f64) = (44.0, 661.0);

const MIN_NAME_LENGTH: usize = 2;
const AGE_BOUNDS: (i64, i64) = (0, 150);

const GENDER_OPTIONS: &[&str] = &["male", "female", "other"];

/// Ordered per-field validation rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSchema {
    rules: BTreeMap<ProfileField, Vec<ValidationRule>>,
}

impl ValidationSchema {
    /// Rules declared for a field, in evaluation order.
    pub fn rules_for(&self, field: ProfileField) -> &[ValidationRule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Runs one field's rules against the draft. Every violated rule
    /// contributes its message; there is no short-circuit within a
    /// field.
    pub fn validate_field(&self, field: ProfileField, draft: &ProfileDraft) -> Vec<String> {
        let value = draft.get(field);
        self.rules_for(field)
            .iter()
            .filter_map(|rule| rule.check(value))
            .collect()
    }

    /// Runs every field's rules against the draft, including fields the
    /// user never touched.
    pub fn validate_all(&self, draft: &ProfileDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in ProfileField::ALL {
            errors.set(field, self.validate_field(field, draft));
        }
        errors
    }
}

/// Builds the validation schema for the given unit preference.
///
/// Deterministic and pure; callers rebuild on every preference change.
pub fn build_schema(preference: &UnitPreference) -> ValidationSchema {
    let (height_min, height_max) = match preference.height {
        HeightUnit::Cm => HEIGHT_BOUNDS_CM,
        HeightUnit::Ft => HEIGHT_BOUNDS_FT,
    };
    let (weight_min, weight_max) = match preference.weight {
        WeightUnit::Kg => WEIGHT_BOUNDS_KG,
        WeightUnit::Lbs => WEIGHT_BOUNDS_LBS,
    };

    let mut rules = BTreeMap::new();

    rules.insert(
        ProfileField::Name,
        vec![ValidationRule::new(
            RuleKind::MinTrimmedLength {
                min: MIN_NAME_LENGTH,
            },
            format!("Name must be at least {} characters", MIN_NAME_LENGTH),
        )],
    );

    rules.insert(
        ProfileField::Email,
        vec![ValidationRule::new(
            RuleKind::EmailShape,
            "Enter a valid email address",
        )],
    );

    rules.insert(
        ProfileField::Age,
        vec![ValidationRule::new(
            RuleKind::IntegerRange {
                min: AGE_BOUNDS.0,
                max: AGE_BOUNDS.1,
            },
            format!(
                "Age must be a whole number between {} and {}",
                AGE_BOUNDS.0, AGE_BOUNDS.1
            ),
        )],
    );

    rules.insert(
        ProfileField::Height,
        vec![ValidationRule::new(
            RuleKind::NumberRange {
                min: height_min,
                max: height_max,
            },
            format!(
                "Height must be between {} and {} {}",
                height_min,
                height_max,
                preference.height.label()
            ),
        )],
    );

    rules.insert(
        ProfileField::Weight,
        vec![ValidationRule::new(
            RuleKind::NumberRange {
                min: weight_min,
                max: weight_max,
            },
            format!(
                "Weight must be between {} and {} {}",
                weight_min,
                weight_max,
                preference.weight.label()
            ),
        )],
    );

    rules.insert(
        ProfileField::Gender,
        vec![ValidationRule::new(
            RuleKind::OneOf {
                options: GENDER_OPTIONS,
            },
            format!(
                "Gender must be one of {}",
                Gender::ALL.map(|g| g.label()).join(", ")
            ),
        )],
    );

    ValidationSchema { rules }
}
