//! Profile module - the editable profile entity.
//!
//! `ProfileDraft` is what the form edits (display units, raw text);
//! `CanonicalProfile` is what the gateway persists (metric units).

mod canonical;
mod draft;
mod field;
mod gender;

pub use canonical::CanonicalProfile;
pub use draft::ProfileDraft;
pub use field::ProfileField;
pub use gender::Gender;
