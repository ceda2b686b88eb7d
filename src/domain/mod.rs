//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `units` - Measurement kinds, display units, and pure conversions
//! - `profile` - Profile drafts (display units) and canonical payloads
//! - `validation` - Rules, field errors, and the dynamic schema builder
//! - `form` - Form session lifecycle and submit orchestration

pub mod form;
pub mod foundation;
pub mod profile;
pub mod units;
pub mod validation;
