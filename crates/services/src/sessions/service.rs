use chrono::{DateTime, Utc};
use std::fmt;
use std::path::Path;

use quiz_core::model::{
    BankGeneration, ChoiceQuestion, OrderingQuestion, QuestionBank, QuizQuestion, QuizSummary,
};
use quiz_core::session::{
    ChoiceOutcome, OrderingOutcome, RequestedCount, SessionError, SessionPhase, SessionState,
};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::Clock;
use crate::error::{LoadError, QuizError};
use crate::loader::BankLoader;
use super::progress::SessionProgress;
use super::view::QuestionView;

/// Verdict of the most recent submission, kept for display until the next transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Choice(ChoiceOutcome),
    Ordering(OrderingOutcome),
}

impl Feedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        match self {
            Feedback::Choice(outcome) => outcome.is_correct(),
            Feedback::Ordering(outcome) => outcome.is_correct(),
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The single live quiz: the loaded bank plus the run over it.
///
/// Selection happens in [`QuizSession::refresh`], once per loaded bank and once
/// after each restart. Rendering the same bank again never reshuffles.
pub struct QuizSession<Q> {
    clock: Clock,
    loader: BankLoader,
    requested: RequestedCount,
    bank: Option<QuestionBank<Q>>,
    state: SessionState,
    selected_for: Option<BankGeneration>,
    started_at: Option<DateTime<Utc>>,
    summary: Option<QuizSummary>,
    feedback: Option<Feedback>,
}

pub type ChoiceQuiz = QuizSession<ChoiceQuestion>;
pub type OrderingQuiz = QuizSession<OrderingQuestion>;

impl<Q: QuizQuestion> QuizSession<Q> {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            loader: BankLoader::new(),
            requested: RequestedCount::ALL,
            bank: None,
            state: SessionState::unselected(),
            selected_for: None,
            started_at: None,
            summary: None,
            feedback: None,
        }
    }

    #[must_use]
    pub fn with_requested_count(mut self, requested: RequestedCount) -> Self {
        self.requested = requested;
        self
    }

    /// Change how many questions the next run asks.
    ///
    /// The current run keeps its order; the count applies on the next load or restart.
    pub fn set_requested_count(&mut self, requested: RequestedCount) {
        self.requested = requested;
    }

    #[must_use]
    pub fn requested_count(&self) -> RequestedCount {
        self.requested
    }

    #[must_use]
    pub fn bank(&self) -> Option<&QuestionBank<Q>> {
        self.bank.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Whether a selection pass is pending for the loaded bank.
    #[must_use]
    pub fn needs_selection(&self) -> bool {
        self.bank
            .as_ref()
            .is_some_and(|bank| self.selected_for != Some(bank.generation()))
    }

    /// Replace the bank and reset the run. Selection happens on the next refresh.
    pub fn load_bank(&mut self, bank: QuestionBank<Q>) {
        info!(
            generation = %bank.generation(),
            questions = bank.len(),
            "question bank loaded"
        );
        self.bank = Some(bank);
        self.state = self.state.restart();
        self.reset_run();
    }

    /// Parse and load a question document.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the document is rejected; the current bank and
    /// run are left exactly as they were.
    pub fn load_str(&mut self, text: &str) -> Result<BankGeneration, LoadError> {
        let bank = self.loader.load_str::<Q>(text)?;
        let generation = bank.generation();
        self.load_bank(bank);
        Ok(generation)
    }

    /// # Errors
    ///
    /// See [`QuizSession::load_str`].
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<BankGeneration, LoadError> {
        let bank = self.loader.load_path::<Q>(path)?;
        let generation = bank.generation();
        self.load_bank(bank);
        Ok(generation)
    }

    /// Run the pending selection pass, if any. Returns true when a new order was chosen.
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(bank) = self.bank.as_ref() else {
            return false;
        };
        let generation = bank.generation();
        if self.selected_for == Some(generation) {
            return false;
        }

        match SessionState::start(bank.len(), self.requested, rng) {
            Ok(state) => {
                debug!(%generation, order = ?state.order(), "selected question order");
                self.state = state;
                self.started_at = Some(self.clock.now());
            }
            Err(err) => {
                debug!(%generation, error = %err, "nothing to select");
                self.state = SessionState::unselected();
            }
        }
        self.selected_for = Some(generation);
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&Q> {
        let index = self.state.current_question()?;
        self.bank.as_ref()?.get(index)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            number: self.state.current_position() + 1,
            total: self.state.total(),
            score: self.state.score(),
            is_complete: self.state.is_complete(),
        }
    }

    /// Render instruction for the current question, if a run is in progress.
    #[must_use]
    pub fn view(&self) -> Option<QuestionView<'_, Q>> {
        let bank_index = self.state.current_question()?;
        let question = self.bank.as_ref()?.get(bank_index)?;
        Some(QuestionView {
            question,
            bank_index,
            phase: self.state.phase(),
            progress: self.progress(),
            is_last: self.state.is_last(),
        })
    }

    /// Move on from an answered question. Completes the run after the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when there is nothing to advance from,
    /// including after completion.
    pub fn advance(&mut self) -> Result<SessionPhase, QuizError> {
        let next = self.state.advance()?;
        if next.is_complete() {
            let now = self.clock.now();
            let started_at = self.started_at.map_or(now, |started| started.min(now));
            let summary = QuizSummary::new(next.score(), next.total(), started_at, now)?;
            info!(
                score = summary.score(),
                total = summary.total(),
                elapsed_secs = (summary.completed_at() - summary.started_at()).num_seconds(),
                "quiz completed"
            );
            self.summary = Some(summary);
        } else {
            debug!(position = next.position(), "advanced to next question");
            self.feedback = None;
        }
        self.state = next;
        Ok(self.state.phase())
    }

    /// Discard the run. The next refresh selects a fresh order over the same bank.
    pub fn restart(&mut self) {
        info!(score = self.state.score(), total = self.state.total(), "quiz restarted");
        self.state = self.state.restart();
        self.reset_run();
    }

    fn reset_run(&mut self) {
        self.selected_for = None;
        self.started_at = None;
        self.summary = None;
        self.feedback = None;
    }

    fn current_indexed(&self) -> Result<(usize, &Q), SessionError> {
        if self.state.is_complete() {
            return Err(SessionError::Completed);
        }
        let index = self.state.current_question().ok_or(SessionError::NotSelected)?;
        let question = self
            .bank
            .as_ref()
            .and_then(|bank| bank.get(index))
            .ok_or(SessionError::NotSelected)?;
        Ok((index, question))
    }
}

impl QuizSession<ChoiceQuestion> {
    /// Grade the selected option for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the current question cannot take an answer.
    pub fn submit_answer(&mut self, selected: &str) -> Result<ChoiceOutcome, QuizError> {
        let (index, question) = self.current_indexed()?;
        if question.is_malformed() {
            warn!(index, answer = ?question.answer(), "grading malformed question");
        }
        let (next, outcome) = self.state.record_answer(question, selected)?;
        debug!(index, selected, correct = outcome.is_correct(), "answer recorded");
        self.state = next;
        self.feedback = Some(Feedback::Choice(outcome.clone()));
        Ok(outcome)
    }
}

impl QuizSession<OrderingQuestion> {
    /// Grade a proposed item order for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the current question cannot take an answer.
    pub fn submit_order<S: AsRef<str>>(
        &mut self,
        proposed: &[S],
    ) -> Result<OrderingOutcome, QuizError> {
        let (index, question) = self.current_indexed()?;
        if question.is_malformed() {
            warn!(index, "grading malformed ordering question");
        }
        let (next, outcome) = self.state.record_ordering(question, proposed)?;
        debug!(index, correct = outcome.is_correct(), "ordering recorded");
        self.state = next;
        self.feedback = Some(Feedback::Ordering(outcome));
        Ok(outcome)
    }
}

impl<Q: QuizQuestion> fmt::Debug for QuizSession<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("requested", &self.requested)
            .field("bank_len", &self.bank.as_ref().map(QuestionBank::len))
            .field("state", &self.state)
            .field("selected_for", &self.selected_for)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::time::{fixed_clock, fixed_now};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BANK: &str = r#"[
        {"question": "Q0", "options": ["A", "B", "C"], "answer": 2},
        {"question": "Q1", "options": ["A", "B", "C"], "answer": 1},
        {"question": "Q2", "options": ["A", "B", "C"], "answer": 3},
        {"question": "Q3", "options": ["A", "B", "C"], "answer": 5}
    ]"#;

    fn loaded(requested: u32) -> ChoiceQuiz {
        let mut quiz = ChoiceQuiz::new(fixed_clock()).with_requested_count(requested.into());
        quiz.load_str(BANK).unwrap();
        quiz
    }

    #[test]
    fn nothing_to_show_before_refresh() {
        let quiz = loaded(0);
        assert!(quiz.needs_selection());
        assert!(quiz.view().is_none());
    }

    #[test]
    fn refresh_is_idempotent_for_the_same_bank() {
        let mut quiz = loaded(3);
        let mut rng = StdRng::seed_from_u64(11);
        assert!(quiz.refresh(&mut rng));
        let order = quiz.state().order().to_vec();
        assert_eq!(order.len(), 3);

        for _ in 0..5 {
            assert!(!quiz.refresh(&mut rng));
            assert_eq!(quiz.state().order(), order.as_slice());
        }
    }

    #[test]
    fn requested_count_change_waits_for_restart() {
        let mut quiz = loaded(2);
        let mut rng = StdRng::seed_from_u64(1);
        quiz.refresh(&mut rng);
        quiz.set_requested_count(RequestedCount::ALL);
        quiz.refresh(&mut rng);
        assert_eq!(quiz.state().total(), 2);

        quiz.restart();
        assert!(quiz.view().is_none());
        quiz.refresh(&mut rng);
        assert_eq!(quiz.state().total(), 4);
    }

    #[test]
    fn failed_load_keeps_previous_bank_and_run() {
        let mut quiz = loaded(0);
        let mut rng = StdRng::seed_from_u64(2);
        quiz.refresh(&mut rng);
        let bank_index = quiz.view().unwrap().bank_index;
        let expected = quiz.current().unwrap().correct_text().to_string();
        quiz.submit_answer(&expected).unwrap();
        let before = quiz.state().clone();
        let generation = quiz.bank().unwrap().generation();

        assert!(quiz.load_str(r#"{"not": "a list"}"#).is_err());
        assert!(quiz.load_str("]").is_err());

        assert_eq!(quiz.state(), &before);
        assert_eq!(quiz.bank().unwrap().generation(), generation);
        assert_eq!(quiz.view().unwrap().bank_index, bank_index);
    }

    #[test]
    fn new_upload_resets_and_reselects() {
        let mut quiz = loaded(0);
        let mut rng = StdRng::seed_from_u64(3);
        quiz.refresh(&mut rng);
        let first = quiz.current().unwrap().correct_text().to_string();
        quiz.submit_answer(&first).unwrap();
        assert_eq!(quiz.state().score(), 1);

        let previous = quiz.bank().unwrap().generation();
        let generation = quiz.load_str(BANK).unwrap();
        assert!(generation > previous);
        assert_eq!(quiz.state().score(), 0);
        assert!(quiz.feedback().is_none());
        assert!(quiz.refresh(&mut rng));
        assert_eq!(quiz.state().phase(), SessionPhase::AwaitingAnswer);
    }

    #[test]
    fn full_run_produces_summary() {
        let mut quiz = loaded(0);
        let mut rng = StdRng::seed_from_u64(4);
        quiz.refresh(&mut rng);

        let mut expected_score = 0;
        while !quiz.is_complete() {
            let question = quiz.current().unwrap().clone();
            let answer = question
                .correct_index()
                .map_or("A", |index| question.options()[index].as_str());
            if quiz.submit_answer(answer).unwrap().is_correct() {
                expected_score += 1;
            }
            assert!(quiz.feedback().is_some());
            quiz.advance().unwrap();
        }

        // Q3 points past its options, so it can never be answered correctly.
        assert_eq!(expected_score, 3);
        let summary = quiz.summary().unwrap();
        assert_eq!(summary.score(), 3);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.message(), "Quiz completed! Score: 3 / 4");
        assert!(matches!(
            quiz.advance(),
            Err(QuizError::Session(SessionError::Completed))
        ));
        assert!(matches!(
            quiz.submit_answer("A"),
            Err(QuizError::Session(SessionError::Completed))
        ));
    }

    #[test]
    fn clock_stepping_back_still_completes() {
        let mut quiz = ChoiceQuiz::new(fixed_clock());
        quiz.load_str(r#"[{"question": "Pick", "options": ["A", "B"], "answer": 1}]"#)
            .unwrap();
        quiz.refresh(&mut StdRng::seed_from_u64(0));
        quiz.submit_answer("A").unwrap();

        quiz.clock.advance(Duration::seconds(-5));
        assert_eq!(quiz.advance().unwrap(), SessionPhase::Completed);
        assert!(quiz.is_complete());

        let summary = quiz.summary().unwrap();
        assert_eq!(summary.message(), "Quiz completed! Score: 1 / 1");
        assert_eq!(summary.started_at(), summary.completed_at());
        assert_eq!(summary.completed_at(), fixed_now() - Duration::seconds(5));
    }

    #[test]
    fn summary_records_run_duration() {
        let mut quiz = loaded(1);
        quiz.refresh(&mut StdRng::seed_from_u64(0));
        let answer = quiz.current().unwrap().correct_text().to_string();
        quiz.submit_answer(&answer).unwrap();

        quiz.clock.advance(Duration::minutes(3));
        quiz.advance().unwrap();
        let summary = quiz.summary().unwrap();
        assert_eq!(summary.started_at(), fixed_now());
        assert_eq!(summary.completed_at() - summary.started_at(), Duration::minutes(3));
    }

    #[test]
    fn incorrect_answer_reports_correct_text() {
        let mut quiz = ChoiceQuiz::new(fixed_clock());
        quiz.load_str(r#"[{"question": "Pick", "options": ["A", "B", "C"], "answer": 2}]"#)
            .unwrap();
        quiz.refresh(&mut StdRng::seed_from_u64(0));
        let outcome = quiz.submit_answer("A").unwrap();
        assert_eq!(
            outcome,
            ChoiceOutcome::Incorrect {
                correct_text: "B".into()
            }
        );
        let view = quiz.view().unwrap();
        assert!(view.can_advance());
        assert_eq!(view.advance_label(), "Finish");
    }

    #[test]
    fn empty_bank_never_starts() {
        let mut quiz = ChoiceQuiz::new(fixed_clock());
        quiz.load_str("[]").unwrap();
        assert!(quiz.refresh(&mut StdRng::seed_from_u64(0)));
        assert!(quiz.view().is_none());
        assert!(!quiz.needs_selection());
        assert!(matches!(
            quiz.submit_answer("A"),
            Err(QuizError::Session(SessionError::NotSelected))
        ));
    }

    #[test]
    fn ordering_session_scores_exact_sequences() {
        let mut quiz = OrderingQuiz::new(fixed_clock());
        quiz.load_str(
            r#"[{"question": "Sort", "items": [{"image": "1.png"}, {"image": "2.png"}, {"image": "3.png"}], "correct_order": ["3", "1", "2"]}]"#,
        )
        .unwrap();
        quiz.refresh(&mut StdRng::seed_from_u64(0));

        assert_eq!(quiz.submit_order(&["1", "2", "3"]).unwrap(), OrderingOutcome::Incorrect);
        assert!(quiz.submit_order(&["3", "1", "2"]).is_err());
        assert_eq!(quiz.advance().unwrap(), SessionPhase::Completed);
        assert_eq!(quiz.summary().unwrap().score(), 0);

        quiz.restart();
        quiz.refresh(&mut StdRng::seed_from_u64(0));
        assert_eq!(quiz.submit_order(&["3", "1", "2"]).unwrap(), OrderingOutcome::Correct);
        assert_eq!(quiz.state().score(), 1);
    }
}
