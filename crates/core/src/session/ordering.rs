use crate::model::OrderingQuestion;

use super::error::SessionError;
use super::state::SessionState;

/// Verdict for one ordering submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingOutcome {
    Correct,
    Incorrect,
}

impl OrderingOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl SessionState {
    /// Grade a proposed item order against the current question.
    ///
    /// Always moves to `Answered`; there is no retry on the same question.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if the session is not awaiting an answer.
    pub fn record_ordering<S: AsRef<str>>(
        &self,
        question: &OrderingQuestion,
        proposed: &[S],
    ) -> Result<(Self, OrderingOutcome), SessionError> {
        let is_correct = question.is_correct(proposed);
        let next = self.record(is_correct)?;
        let outcome = if is_correct {
            OrderingOutcome::Correct
        } else {
            OrderingOutcome::Incorrect
        };
        Ok((next, outcome))
    }
}
