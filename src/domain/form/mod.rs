//! Form module - the editing session state machine.

mod phase;
mod session;

pub use phase::SessionPhase;
pub use session::{CancelOutcome, FormSession, SubmitOutcome};
