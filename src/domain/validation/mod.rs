//! Validation module - rules, per-field errors, and the schema builder.
//!
//! Validation outcomes are data, never errors: a rule violation becomes
//! a message in a `FieldErrors` map that callers inspect.

mod field_errors;
mod rule;
mod schema;

pub use field_errors::FieldErrors;
pub use rule::{RuleKind, ValidationRule, NOT_A_NUMBER_MESSAGE};
pub use schema::{build_schema, ValidationSchema};
