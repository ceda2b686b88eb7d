//! In-memory adapters for the crate's ports.

mod preference_storage;
mod profile_gateway;

pub use preference_storage::InMemoryPreferenceStorage;
pub use profile_gateway::InMemoryProfileGateway;
