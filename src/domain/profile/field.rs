//! Field names of the profile form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Age,
    Height,
    Weight,
    Gender,
}

impl ProfileField {
    /// All fields, in form order. Submit validates them in this order.
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Age,
        ProfileField::Height,
        ProfileField::Weight,
        ProfileField::Gender,
    ];

    /// Field name as used in error payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Gender => "gender",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_field_once() {
        assert_eq!(ProfileField::ALL.len(), 6);
        let mut names: Vec<_> = ProfileField::ALL.iter().map(|f| f.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&ProfileField::Height).unwrap(),
            "\"height\""
        );
    }
}
