//! Validation rules represented as data.
//!
//! Rules carry their parameters instead of closures so a built schema is
//! plain data: comparable, printable, and serializable for the UI. Each
//! rule yields exactly one message per evaluation.

use serde::Serialize;

/// Fixed message for numeric input that does not parse. Checked before
/// any bound comparison.
pub const NOT_A_NUMBER_MESSAGE: &str = "Must be a number";

/// The checkable condition a rule enforces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RuleKind {
    /// Trimmed character count must be at least `min`.
    MinTrimmedLength { min: usize },
    /// `local@domain.tld` shape: one `@`, a `.` after it, no whitespace.
    EmailShape,
    /// Whole number within inclusive bounds.
    IntegerRange { min: i64, max: i64 },
    /// Number within inclusive bounds (bounds are in display units).
    NumberRange { min: f64, max: f64 },
    /// Value must match one of the options (case-insensitive).
    OneOf { options: &'static [&'static str] },
}

/// A named predicate with a human-readable failure message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationRule {
    kind: RuleKind,
    message: String,
}

impl ValidationRule {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The message reported when the rule's bound or shape check fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Evaluates the rule against a raw field value.
    ///
    /// Returns the violated message, or `None` if the value passes.
    /// Numeric rules report [`NOT_A_NUMBER_MESSAGE`] for unparseable
    /// input instead of their bound message.
    pub fn check(&self, raw: &str) -> Option<String> {
        match &self.kind {
            RuleKind::MinTrimmedLength { min } => {
                if raw.trim().chars().count() < *min {
                    Some(self.message.clone())
                } else {
                    None
                }
            }
            RuleKind::EmailShape => {
                if email_shape_ok(raw.trim()) {
                    None
                } else {
                    Some(self.message.clone())
                }
            }
            RuleKind::IntegerRange { min, max } => match raw.trim().parse::<f64>() {
                Err(_) => Some(NOT_A_NUMBER_MESSAGE.to_string()),
                Ok(value) if !value.is_finite() => Some(NOT_A_NUMBER_MESSAGE.to_string()),
                Ok(value) => {
                    let whole = value.fract() == 0.0;
                    if whole && value >= *min as f64 && value <= *max as f64 {
                        None
                    } else {
                        Some(self.message.clone())
                    }
                }
            },
            RuleKind::NumberRange { min, max } => match raw.trim().parse::<f64>() {
                Err(_) => Some(NOT_A_NUMBER_MESSAGE.to_string()),
                Ok(value) if !value.is_finite() => Some(NOT_A_NUMBER_MESSAGE.to_string()),
                Ok(value) => {
                    if value >= *min && value <= *max {
                        None
                    } else {
                        Some(self.message.clone())
                    }
                }
            },
            RuleKind::OneOf { options } => {
                let trimmed = raw.trim();
                if options.iter().any(|o| o.eq_ignore_ascii_case(trimmed)) {
                    None
                } else {
                    Some(self.message.clone())
                }
            }
        }
    }
}

fn email_shape_ok(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = value.find('@') else {
        return false;
    };
    let local = &value[..at];
    let domain = &value[at + 1..];
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => !domain[..dot].is_empty() && !domain[dot + 1..].is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_length(min: usize) -> ValidationRule {
        ValidationRule::new(RuleKind::MinTrimmedLength { min }, "Too short")
    }

    #[test]
    fn min_trimmed_length_counts_after_trimming() {
        let rule = min_length(2);
        assert!(rule.check("  A  ").is_some());
        assert!(rule.check("Al").is_none());
        assert!(rule.check(" Al ").is_none());
    }

    #[test]
    fn email_shape_accepts_simple_addresses() {
        let rule = ValidationRule::new(RuleKind::EmailShape, "Invalid email");
        assert!(rule.check("a@b.co").is_none());
        assert!(rule.check("user.name@example.com").is_none());
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        let rule = ValidationRule::new(RuleKind::EmailShape, "Invalid email");
        assert_eq!(rule.check("invalid-email"), Some("Invalid email".to_string()));
        assert!(rule.check("@example.com").is_some());
        assert!(rule.check("user@").is_some());
        assert!(rule.check("user@example").is_some());
        assert!(rule.check("user@.com").is_some());
        assert!(rule.check("user@example.").is_some());
        assert!(rule.check("us er@example.com").is_some());
        assert!(rule.check("").is_some());
    }

    #[test]
    fn integer_range_is_inclusive() {
        let rule = ValidationRule::new(RuleKind::IntegerRange { min: 0, max: 150 }, "Bad age");
        assert!(rule.check("0").is_none());
        assert!(rule.check("150").is_none());
        assert_eq!(rule.check("151"), Some("Bad age".to_string()));
        assert_eq!(rule.check("-1"), Some("Bad age".to_string()));
    }

    #[test]
    fn integer_range_rejects_fractions_with_rule_message() {
        let rule = ValidationRule::new(RuleKind::IntegerRange { min: 0, max: 150 }, "Bad age");
        assert_eq!(rule.check("34.5"), Some("Bad age".to_string()));
    }

    #[test]
    fn numeric_rules_report_not_a_number_before_bounds() {
        let int_rule = ValidationRule::new(RuleKind::IntegerRange { min: 0, max: 150 }, "Bad age");
        let num_rule = ValidationRule::new(
            RuleKind::NumberRange { min: 50.0, max: 300.0 },
            "Bad height",
        );
        assert_eq!(int_rule.check("abc"), Some(NOT_A_NUMBER_MESSAGE.to_string()));
        assert_eq!(num_rule.check("abc"), Some(NOT_A_NUMBER_MESSAGE.to_string()));
        assert_eq!(num_rule.check(""), Some(NOT_A_NUMBER_MESSAGE.to_string()));
        assert_eq!(num_rule.check("NaN"), Some(NOT_A_NUMBER_MESSAGE.to_string()));
    }

    #[test]
    fn number_range_is_inclusive() {
        let rule = ValidationRule::new(
            RuleKind::NumberRange { min: 1.5, max: 10.0 },
            "Bad height",
        );
        assert!(rule.check("1.5").is_none());
        assert!(rule.check("10").is_none());
        assert!(rule.check("1.49").is_some());
        assert!(rule.check("10.01").is_some());
    }

    #[test]
    fn one_of_matches_case_insensitively() {
        let rule = ValidationRule::new(
            RuleKind::OneOf {
                options: &["male", "female", "other"],
            },
            "Bad gender",
        );
        assert!(rule.check("male").is_none());
        assert!(rule.check("Female").is_none());
        assert!(rule.check("unknown").is_some());
        assert!(rule.check("").is_some());
    }
}
