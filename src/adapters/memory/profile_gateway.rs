//! In-memory profile gateway adapter.
//!
//! Records every save and can be scripted to fail or to delay, which is
//! what the form-session tests need to exercise the in-flight states.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::domain::profile::CanonicalProfile;
use crate::ports::{GatewayError, ProfileGateway};

#[derive(Debug, Default)]
struct State {
    saved: Vec<CanonicalProfile>,
    fail_next: Option<String>,
    delay: Option<Duration>,
}

/// In-memory implementation of [`ProfileGateway`].
#[derive(Debug, Default)]
pub struct InMemoryProfileGateway {
    state: Mutex<State>,
}

impl InMemoryProfileGateway {
    /// Create a new in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `save` call fail with the given message.
    pub fn fail_next_with(&self, message: impl Into<String>) {
        self.lock().fail_next = Some(message.into());
    }

    /// Delay every `save` call, simulating a slow backend.
    pub fn delay_saves(&self, delay: Duration) {
        self.lock().delay = Some(delay);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.lock().saved.len()
    }

    /// The most recently saved profile, if any.
    pub fn last_saved(&self) -> Option<CanonicalProfile> {
        self.lock().saved.last().cloned()
    }

    /// Clear all recorded saves (useful for tests).
    pub fn clear(&self) {
        let mut state = self.lock();
        state.saved.clear();
        state.fail_next = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProfileGateway for InMemoryProfileGateway {
    async fn save(&self, profile: &CanonicalProfile) -> Result<(), GatewayError> {
        let delay = self.lock().delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        if let Some(message) = state.fail_next.take() {
            return Err(GatewayError::SaveFailed(message));
        }
        state.saved.push(profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Gender;

    fn profile() -> CanonicalProfile {
        CanonicalProfile {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 34,
            height_cm: 175.0,
            weight_kg: 70.0,
            gender: Gender::Female,
        }
    }

    #[tokio::test]
    async fn save_records_the_profile() {
        let gateway = InMemoryProfileGateway::new();
        gateway.save(&profile()).await.unwrap();

        assert_eq!(gateway.save_count(), 1);
        assert_eq!(gateway.last_saved().unwrap().name, "Alice");
    }

    #[tokio::test]
    async fn scripted_failure_applies_once() {
        let gateway = InMemoryProfileGateway::new();
        gateway.fail_next_with("boom");

        let err = gateway.save(&profile()).await.unwrap_err();
        assert_eq!(err.message(), "boom");
        assert_eq!(gateway.save_count(), 0);

        gateway.save(&profile()).await.unwrap();
        assert_eq!(gateway.save_count(), 1);
    }
}
