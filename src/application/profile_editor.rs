//! Profile editor - wires the preference store to a form session.
//!
//! Owns the reactive edge: a preference update triggers schema rebuild,
//! value conversion, and re-validation on the session before the update
//! call returns. UI binding stays external; this type only exposes
//! state and operations.

use std::sync::{Arc, Weak};

use crate::domain::form::{CancelOutcome, FormSession, SubmitOutcome};
use crate::domain::foundation::DomainError;
use crate::domain::profile::{CanonicalProfile, ProfileField};
use crate::domain::units::UnitPreferenceUpdate;
use crate::ports::ProfileGateway;

use super::{PreferenceStore, SubscriptionId};

/// An open profile editing flow: one session bound to one preference
/// store and one gateway.
pub struct ProfileEditor {
    preferences: Arc<PreferenceStore>,
    gateway: Arc<dyn ProfileGateway>,
    session: Arc<FormSession>,
    subscription: SubscriptionId,
}

impl ProfileEditor {
    /// Opens an editor over an empty draft.
    pub fn open(preferences: Arc<PreferenceStore>, gateway: Arc<dyn ProfileGateway>) -> Self {
        let session = Arc::new(FormSession::new(preferences.get()));
        Self::wire(preferences, gateway, session)
    }

    /// Opens an editor over a stored profile.
    pub fn open_with_profile(
        preferences: Arc<PreferenceStore>,
        gateway: Arc<dyn ProfileGateway>,
        profile: &CanonicalProfile,
    ) -> Self {
        let session = Arc::new(FormSession::from_profile(profile, preferences.get()));
        Self::wire(preferences, gateway, session)
    }

    fn wire(
        preferences: Arc<PreferenceStore>,
        gateway: Arc<dyn ProfileGateway>,
        session: Arc<FormSession>,
    ) -> Self {
        let weak: Weak<FormSession> = Arc::downgrade(&session);
        let subscription = preferences.subscribe(move |preference| {
            if let Some(session) = weak.upgrade() {
                session.apply_preference(preference);
            }
        });

        tracing::debug!(session = %session.id(), "profile editor opened");
        Self {
            preferences,
            gateway,
            session,
            subscription,
        }
    }

    /// The underlying session, for read access to values and errors.
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Edits one field; validates that field immediately.
    pub fn set_field(&self, field: ProfileField, value: impl Into<String>) {
        self.session.set_field(field, value);
    }

    /// Changes display units: persists the preference, then rebuilds
    /// the schema and re-validates the open session before returning.
    pub fn update_units(&self, update: UnitPreferenceUpdate) -> Result<(), DomainError> {
        self.preferences.update(update)?;
        Ok(())
    }

    /// Submits the form through the gateway.
    pub async fn save(&self) -> Result<SubmitOutcome, DomainError> {
        self.session.submit(self.gateway.as_ref()).await
    }

    /// Discards edits, asking `confirm` first when the session is
    /// dirty.
    pub fn cancel(&self, confirm: impl FnOnce() -> bool) -> CancelOutcome {
        self.session.cancel(confirm)
    }
}

impl Drop for ProfileEditor {
    fn drop(&mut self) {
        self.preferences.unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryPreferenceStorage, InMemoryProfileGateway};
    use crate::domain::units::{HeightUnit, UnitPreference, WeightUnit};

    fn preferences() -> Arc<PreferenceStore> {
        Arc::new(
            PreferenceStore::load(
                Arc::new(InMemoryPreferenceStorage::new()),
                "prefs:user-1",
                UnitPreference::default(),
            )
            .unwrap(),
        )
    }

    #[test]
    fn unit_change_re_expresses_open_session_values() {
        let editor = ProfileEditor::open(preferences(), Arc::new(InMemoryProfileGateway::new()));
        editor.set_field(ProfileField::Height, "175");

        editor
            .update_units(UnitPreferenceUpdate::height(HeightUnit::Ft))
            .unwrap();

        assert_eq!(editor.session().value(ProfileField::Height), "5.75");
    }

    #[test]
    fn unit_change_can_invalidate_a_previously_valid_value() {
        let editor = ProfileEditor::open(preferences(), Arc::new(InMemoryProfileGateway::new()));
        // 650 lbs is within the lbs bounds but 650 kg is not.
        editor
            .update_units(UnitPreferenceUpdate::weight(WeightUnit::Lbs))
            .unwrap();
        editor.set_field(ProfileField::Weight, "650");
        assert!(!editor
            .session()
            .field_errors()
            .has_errors_on(ProfileField::Weight));

        editor
            .update_units(UnitPreferenceUpdate::weight(WeightUnit::Kg))
            .unwrap();
        // 650 lbs converts to 294.8 kg, which is back in bounds; the
        // draft now reads in kg.
        assert_eq!(editor.session().value(ProfileField::Weight), "294.8");
        assert!(!editor
            .session()
            .field_errors()
            .has_errors_on(ProfileField::Weight));
    }

    #[test]
    fn dropping_the_editor_unsubscribes_from_the_store() {
        let prefs = preferences();
        {
            let _editor =
                ProfileEditor::open(Arc::clone(&prefs), Arc::new(InMemoryProfileGateway::new()));
            assert_eq!(prefs.subscriber_count(), 1);
        }
        assert_eq!(prefs.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn save_goes_through_the_injected_gateway() {
        let gateway = Arc::new(InMemoryProfileGateway::new());
        let editor =
            ProfileEditor::open(preferences(), Arc::clone(&gateway) as Arc<dyn ProfileGateway>);

        editor.set_field(ProfileField::Name, "Alice");
        editor.set_field(ProfileField::Email, "alice@example.com");
        editor.set_field(ProfileField::Age, "34");
        editor.set_field(ProfileField::Height, "175");
        editor.set_field(ProfileField::Weight, "70");
        editor.set_field(ProfileField::Gender, "female");

        let outcome = editor.save().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(gateway.save_count(), 1);
    }
}
