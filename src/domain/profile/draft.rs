//! Editable profile draft in display units.
//!
//! A draft holds every field as the raw text the user entered, so
//! unparseable input survives until validation reports it. Numeric
//! interpretation happens in the validation module and on
//! canonicalization, never on entry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::units::{ConversionRule, UnitPreference};

use super::{CanonicalProfile, Gender, ProfileField};

/// Profile form values as entered, expressed in display units.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    name: String,
    email: String,
    age: String,
    height: String,
    weight: String,
    gender: String,
}

impl ProfileDraft {
    /// Builds a draft from a stored profile, converting height and
    /// weight into the preferred display units.
    pub fn from_canonical(profile: &CanonicalProfile, preference: &UnitPreference) -> Self {
        let height = preference.height.conversion().to_display(profile.height_cm);
        let weight = preference.weight.conversion().to_display(profile.weight_kg);

        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            age: profile.age.to_string(),
            height: format_number(height),
            weight: format_number(weight),
            gender: profile.gender.label().to_string(),
        }
    }

    /// Returns a field's raw text value.
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Age => &self.age,
            ProfileField::Height => &self.height,
            ProfileField::Weight => &self.weight,
            ProfileField::Gender => &self.gender,
        }
    }

    /// Replaces a field's raw text value.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Age => self.age = value,
            ProfileField::Height => self.height = value,
            ProfileField::Weight => self.weight = value,
            ProfileField::Gender => self.gender = value,
        }
    }

    /// Converts the draft to the canonical payload under the given
    /// preference.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` if a numeric field does not parse or the gender
    /// label is unknown. Callers run full-form validation first, which
    /// reports the same conditions field by field.
    pub fn to_canonical(
        &self,
        preference: &UnitPreference,
    ) -> Result<CanonicalProfile, ValidationError> {
        let age = parse_number(ProfileField::Age, &self.age)?;
        if age.fract() != 0.0 {
            return Err(ValidationError::invalid_format(
                "age",
                "must be a whole number",
            ));
        }
        let age = u32::try_from(age as i64)
            .map_err(|_| ValidationError::invalid_format("age", "must not be negative"))?;

        let height = parse_number(ProfileField::Height, &self.height)?;
        let weight = parse_number(ProfileField::Weight, &self.weight)?;
        let gender: Gender = self.gender.parse()?;

        Ok(CanonicalProfile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            age,
            height_cm: preference.height.conversion().from_display(height),
            weight_kg: preference.weight.conversion().from_display(weight),
            gender,
        })
    }

    /// Re-expresses parseable height/weight values when the display
    /// units change, going through the canonical unit so the underlying
    /// quantity is preserved. Unparseable text is left untouched.
    pub fn convert_units(&mut self, from: &UnitPreference, to: &UnitPreference) {
        if from.height != to.height {
            convert_field(
                &mut self.height,
                from.height.conversion(),
                to.height.conversion(),
            );
        }
        if from.weight != to.weight {
            convert_field(
                &mut self.weight,
                from.weight.conversion(),
                to.weight.conversion(),
            );
        }
    }
}

fn convert_field(value: &mut String, old_rule: ConversionRule, new_rule: ConversionRule) {
    if let Ok(display) = value.trim().parse::<f64>() {
        if display.is_finite() {
            let canonical = old_rule.from_display(display);
            *value = format_number(new_rule.to_display(canonical));
        }
    }
}

fn parse_number(field: ProfileField, raw: &str) -> Result<f64, ValidationError> {
    let parsed: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::invalid_format(field.name(), "must be a number"))?;
    if !parsed.is_finite() {
        return Err(ValidationError::invalid_format(
            field.name(),
            "must be a finite number",
        ));
    }
    Ok(parsed)
}

fn format_number(value: f64) -> String {
    format!("{}", value)
}
