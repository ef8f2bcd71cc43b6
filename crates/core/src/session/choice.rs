use crate::model::ChoiceQuestion;

use super::error::SessionError;
use super::state::SessionState;

/// Verdict for one multiple-choice submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Correct,
    /// `correct_text` is the right option, or `"N/A"` for a malformed record.
    Incorrect { correct_text: String },
}

impl ChoiceOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl SessionState {
    /// Grade `selected` against the current question.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if the session is not awaiting an answer.
    pub fn record_answer(
        &self,
        question: &ChoiceQuestion,
        selected: &str,
    ) -> Result<(Self, ChoiceOutcome), SessionError> {
        let is_correct = question.is_correct(selected);
        let next = self.record(is_correct)?;
        let outcome = if is_correct {
            ChoiceOutcome::Correct
        } else {
            ChoiceOutcome::Incorrect {
                correct_text: question.correct_text().to_string(),
            }
        };
        Ok((next, outcome))
    }
}
