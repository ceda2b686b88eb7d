//! VitalTrack Core - Unit-Aware Profile/Settings Validation Engine
//!
//! The UI-independent core of the VitalTrack health tracker's profile
//! and settings features: unit conversion, a subscribable preference
//! store, a validation schema whose numeric bounds follow the selected
//! display units, and a form session orchestrating validation and
//! submission to the persistence gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
