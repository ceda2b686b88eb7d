//! Form session - stateful orchestration of editing, validation, and
//! submission.
//!
//! # Invariants
//!
//! - Field values are held in display units; the gateway only ever sees
//!   canonical data.
//! - At most one submit is in flight; a second `submit` while
//!   `Submitting` is rejected without touching the gateway.
//! - The internal lock is never held across the gateway await, so
//!   `set_field` stays responsive while a submit is in flight.
//! - Every failure leaves the session in a defined, user-recoverable
//!   state.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, ErrorCode, FormSessionId, StateMachine, Timestamp};
use crate::domain::profile::{CanonicalProfile, ProfileDraft, ProfileField};
use crate::domain::units::UnitPreference;
use crate::domain::validation::{build_schema, FieldErrors, ValidationSchema};
use crate::ports::ProfileGateway;

/// Result of a submit attempt that reached a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Gateway accepted the canonical payload.
    Saved,
    /// Full-form validation failed; the gateway was not called.
    ValidationFailed(FieldErrors),
    /// Gateway rejected the save; the message is shown verbatim.
    Rejected(String),
}

/// Result of a cancel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Edits were discarded and the baseline restored.
    Reverted,
    /// The user declined the confirmation; edits are preserved.
    KeptEdits,
}

struct Inner {
    values: ProfileDraft,
    baseline: ProfileDraft,
    units: UnitPreference,
    schema: ValidationSchema,
    errors: FieldErrors,
    phase: super::SessionPhase,
    banner: Option<String>,
    // Bumped on every edit; detects edits that land while a submit is
    // in flight.
    revision: u64,
}

/// A stateful editing session over a profile form.
pub struct FormSession {
    id: FormSessionId,
    opened_at: Timestamp,
    inner: RwLock<Inner>,
}

impl FormSession {
    /// Opens a session over an empty draft.
    pub fn new(preference: UnitPreference) -> Self {
        Self::with_draft(ProfileDraft::default(), preference)
    }

    /// Opens a session over a stored profile, converting it into the
    /// preferred display units.
    pub fn from_profile(profile: &CanonicalProfile, preference: UnitPreference) -> Self {
        Self::with_draft(ProfileDraft::from_canonical(profile, &preference), preference)
    }

    fn with_draft(draft: ProfileDraft, preference: UnitPreference) -> Self {
        let schema = build_schema(&preference);
        Self {
            id: FormSessionId::new(),
            opened_at: Timestamp::now(),
            inner: RwLock::new(Inner {
                baseline: draft.clone(),
                values: draft,
                units: preference,
                schema,
                errors: FieldErrors::new(),
                phase: super::SessionPhase::Clean,
                banner: None,
                revision: 0,
            }),
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> FormSessionId {
        self.id
    }

    /// When the session was opened.
    pub fn opened_at(&self) -> Timestamp {
        self.opened_at
    }

    /// Current phase.
    pub fn phase(&self) -> super::SessionPhase {
        self.read().phase
    }

    /// True if the session has unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.read().phase.is_dirty()
    }

    /// Current raw value of a field.
    pub fn value(&self, field: ProfileField) -> String {
        self.read().values.get(field).to_string()
    }

    /// Snapshot of the full draft.
    pub fn draft(&self) -> ProfileDraft {
        self.read().values.clone()
    }

    /// Snapshot of the current field errors.
    pub fn field_errors(&self) -> FieldErrors {
        self.read().errors.clone()
    }

    /// Current form-level error banner, if any.
    pub fn banner(&self) -> Option<String> {
        self.read().banner.clone()
    }

    /// Units the draft is currently expressed in.
    pub fn units(&self) -> UnitPreference {
        self.read().units
    }

    /// Updates one field and validates only that field against the
    /// current rule set. Accepted in every phase, including while a
    /// submit is in flight.
    pub fn set_field(&self, field: ProfileField, value: impl Into<String>) {
        let mut inner = self.write();
        inner.values.set(field, value.into());

        let messages = inner.schema.validate_field(field, &inner.values);
        tracing::debug!(
            session = %self.id,
            field = %field,
            violations = messages.len(),
            "field updated"
        );
        inner.errors.set(field, messages);

        if inner.phase == super::SessionPhase::Clean {
            inner.phase = super::SessionPhase::Dirty;
        }
        inner.banner = None;
        inner.revision += 1;
    }

    /// Rebuilds the validation schema for a new unit preference,
    /// converts parseable height/weight values into the new display
    /// units, and re-validates the whole draft.
    ///
    /// Called synchronously from the preference store's notification,
    /// so the session never shows stale bounds.
    pub fn apply_preference(&self, preference: &UnitPreference) {
        let mut inner = self.write();
        if inner.units == *preference {
            return;
        }

        let old_units = inner.units;
        let (mut values, mut baseline) = (inner.values.clone(), inner.baseline.clone());
        values.convert_units(&old_units, preference);
        baseline.convert_units(&old_units, preference);

        let schema = build_schema(preference);
        let errors = schema.validate_all(&values);
        tracing::debug!(
            session = %self.id,
            violations = errors.total(),
            "units changed, draft re-validated"
        );

        inner.values = values;
        inner.baseline = baseline;
        inner.units = *preference;
        inner.schema = schema;
        inner.errors = errors;
    }

    /// Validates the full form and, if it passes, persists the
    /// canonical payload through the gateway.
    ///
    /// Two-phase by design: `set_field` gives cheap per-field feedback
    /// while typing; this is the authoritative whole-form check.
    ///
    /// # Errors
    ///
    /// - `SubmitInFlight` if a prior submit has not resolved yet. The
    ///   gateway is not called a second time.
    pub async fn submit(
        &self,
        gateway: &dyn ProfileGateway,
    ) -> Result<SubmitOutcome, DomainError> {
        // Phase 1: validate and stage under the lock.
        let (canonical, submitted, revision_at_submit) = {
            let mut inner = self.write();
            if inner.phase.is_submitting() {
                return Err(DomainError::new(
                    ErrorCode::SubmitInFlight,
                    "A submit is already in progress for this session",
                ));
            }

            let errors = inner.schema.validate_all(&inner.values);
            if !errors.is_empty() {
                tracing::debug!(
                    session = %self.id,
                    violations = errors.total(),
                    "submit blocked by validation"
                );
                inner.errors = errors.clone();
                inner.phase = super::SessionPhase::Dirty;
                return Ok(SubmitOutcome::ValidationFailed(errors));
            }

            let canonical = inner
                .values
                .to_canonical(&inner.units)
                .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;

            inner.phase = inner
                .phase
                .transition_to(super::SessionPhase::Submitting)
                .map_err(|e| {
                    DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                })?;
            inner.errors.clear();
            inner.banner = None;
            (canonical, inner.values.clone(), inner.revision)
        };

        // Phase 2: await the gateway without holding the lock.
        let result = gateway.save(&canonical).await;

        // Phase 3: apply the outcome against the session's current
        // state, not a snapshot from submission time.
        let mut inner = self.write();
        match result {
            Ok(()) => {
                inner.baseline = submitted;
                let edited_in_flight = inner.revision != revision_at_submit;
                inner.phase = if edited_in_flight {
                    super::SessionPhase::Dirty
                } else {
                    super::SessionPhase::Clean
                };
                tracing::info!(
                    session = %self.id,
                    dirty = edited_in_flight,
                    "profile saved"
                );
                Ok(SubmitOutcome::Saved)
            }
            Err(err) => {
                inner.phase = super::SessionPhase::Dirty;
                inner.banner = Some(err.message().to_string());
                tracing::warn!(session = %self.id, error = %err, "profile save failed");
                Ok(SubmitOutcome::Rejected(err.message().to_string()))
            }
        }
    }

    /// Discards edits and reverts to the last-saved baseline.
    ///
    /// A dirty session asks the caller-provided `confirm` first; a
    /// declined confirmation preserves the edits. A clean session
    /// reverts immediately without prompting. While a submit is in
    /// flight cancel is refused without prompting: the draft is about
    /// to become the new baseline, so there is nothing coherent to
    /// revert to until the submit resolves.
    pub fn cancel(&self, confirm: impl FnOnce() -> bool) -> CancelOutcome {
        let mut inner = self.write();
        if inner.phase.is_submitting() {
            tracing::debug!(session = %self.id, "cancel refused while a submit is in flight");
            return CancelOutcome::KeptEdits;
        }
        if inner.phase.is_dirty() && !confirm() {
            return CancelOutcome::KeptEdits;
        }

        inner.values = inner.baseline.clone();
        inner.errors.clear();
        inner.banner = None;
        inner.phase = super::SessionPhase::Clean;
        inner.revision += 1;
        CancelOutcome::Reverted
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
