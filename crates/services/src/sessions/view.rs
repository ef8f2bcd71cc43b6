use quiz_core::model::QuizQuestion;
use quiz_core::session::SessionPhase;

use super::progress::SessionProgress;

/// Render instruction for the question currently on screen.
///
/// Borrowed from the session; rebuild it after every transition.
#[derive(Debug)]
pub struct QuestionView<'a, Q> {
    pub question: &'a Q,
    pub bank_index: usize,
    pub phase: SessionPhase,
    pub progress: SessionProgress,
    pub is_last: bool,
}

impl<Q: QuizQuestion> QuestionView<'_, Q> {
    #[must_use]
    pub fn heading(&self) -> String {
        self.progress.heading()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.question.text()
    }

    /// Submit is offered until the question is answered.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == SessionPhase::AwaitingAnswer
    }

    /// Next (or Finish, on the last question) is offered once answered.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.phase == SessionPhase::Answered
    }

    #[must_use]
    pub fn advance_label(&self) -> &'static str {
        if self.is_last { "Finish" } else { "Next" }
    }
}
