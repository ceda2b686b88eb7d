//! Per-field validation error accumulation.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::profile::ProfileField;

/// Ordered violation messages keyed by field.
///
/// An absent or empty entry means the field is valid. Insertion keeps
/// rule order, so messages render in the order the schema declares them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ProfileField, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a field's messages; an empty list clears the entry.
    pub fn set(&mut self, field: ProfileField, messages: Vec<String>) {
        if messages.is_empty() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, messages);
        }
    }

    /// Messages currently recorded for a field.
    pub fn messages(&self, field: ProfileField) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if the field has at least one violation.
    pub fn has_errors_on(&self, field: ProfileField) -> bool {
        !self.messages(field).is_empty()
    }

    /// True if no field has violations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields with at least one violation, in field order.
    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.0.keys().copied()
    }

    /// Total violation count across all fields.
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
