//! Canonical (metric) profile payload handed to the persistence gateway.

use serde::{Deserialize, Serialize};

use super::Gender;

/// Profile data in canonical units: height in cm, weight in kg.
///
/// This is the durable representation; display-unit values never reach
/// the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalProfile {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: Gender,
}
