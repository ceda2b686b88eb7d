//! Application layer - stateful services composing the domain and ports.

mod preference_store;
mod profile_editor;

pub use preference_store::{PreferenceStore, SubscriptionId};
pub use profile_editor::ProfileEditor;
