//! Lifecycle phase of a form session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Phase of a form session.
///
/// Valid transitions:
/// - Clean -> Dirty (first edit)
/// - Clean/Dirty -> Submitting (submit accepted)
/// - Submitting -> Clean (save succeeded, no edits in flight)
/// - Submitting -> Dirty (save failed, or edits arrived in flight)
/// - Dirty -> Clean (confirmed discard, or save of identical values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Clean,
    Dirty,
    Submitting,
}

impl SessionPhase {
    /// True if there are unsaved edits.
    pub fn is_dirty(&self) -> bool {
        matches!(self, SessionPhase::Dirty)
    }

    /// True if a submit is in flight. At most one submit may be in
    /// flight per session.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SessionPhase::Submitting)
    }
}

impl StateMachine for SessionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            (Clean, Dirty)
                | (Clean, Submitting)
                | (Dirty, Submitting)
                | (Dirty, Clean)
                | (Submitting, Clean)
                | (Submitting, Dirty)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            Clean => vec![Dirty, Submitting],
            Dirty => vec![Submitting, Clean],
            Submitting => vec![Clean, Dirty],
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionPhase::Clean => "Clean",
            SessionPhase::Dirty => "Dirty",
            SessionPhase::Submitting => "Submitting",
        };
        write!(f, "{}", s)
    }
}
