//! Quiz session state and its pure transitions.
//!
//! Every transition takes `&SessionState` and returns a new state, so a
//! rejected action leaves the caller's state exactly as it was.

mod choice;
mod error;
mod ordering;
mod selection;
mod state;

pub use choice::ChoiceOutcome;
pub use error::SessionError;
pub use ordering::OrderingOutcome;
pub use selection::{RequestedCount, select_order};
pub use state::{SessionPhase, SessionState};
