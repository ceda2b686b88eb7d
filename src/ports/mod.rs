//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod preference_storage;
mod profile_gateway;

pub use preference_storage::{PreferenceStorage, PreferenceStorageError};
pub use profile_gateway::{GatewayError, ProfileGateway};
