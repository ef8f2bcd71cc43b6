use rand::Rng;

use super::error::SessionError;
use super::selection::{RequestedCount, select_order};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// No order selected yet: fresh session, or just restarted.
    #[default]
    Unselected,
    AwaitingAnswer,
    Answered,
    Completed,
}

/// Progress of one quiz run over a bank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    order: Vec<usize>,
    position: usize,
    score: usize,
    answered: bool,
    phase: SessionPhase,
}

impl SessionState {
    /// Empty state waiting for a selection pass.
    #[must_use]
    pub fn unselected() -> Self {
        Self::default()
    }

    /// Select a random order over `total` questions and begin at the first one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` when there is nothing to ask.
    pub fn start<R: Rng + ?Sized>(
        total: usize,
        requested: RequestedCount,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        Self::with_order(select_order(total, requested, rng))
    }

    /// Begin a run over an explicit order of bank indices.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` if `order` is empty.
    pub fn with_order(order: Vec<usize>) -> Result<Self, SessionError> {
        if order.is_empty() {
            return Err(SessionError::EmptyBank);
        }
        debug_assert!(
            {
                let mut sorted = order.clone();
                sorted.sort_unstable();
                sorted.windows(2).all(|pair| pair[0] != pair[1])
            },
            "order must not repeat indices"
        );
        Ok(Self {
            order,
            position: 0,
            score: 0,
            answered: false,
            phase: SessionPhase::AwaitingAnswer,
        })
    }

    /// Rehydrate a state kept by the host between renders.
    ///
    /// Values are taken as given; readers clamp an out-of-range `position`.
    #[must_use]
    pub fn from_parts(
        order: Vec<usize>,
        position: usize,
        score: usize,
        answered: bool,
        phase: SessionPhase,
    ) -> Self {
        Self {
            order,
            position,
            score,
            answered,
            phase,
        }
    }

    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// Position used for display and lookup; falls back to 0 when out of range.
    #[must_use]
    pub fn current_position(&self) -> usize {
        if self.position < self.order.len() {
            self.position
        } else {
            0
        }
    }

    /// Bank index of the question on screen, if an order has been selected.
    #[must_use]
    pub fn current_question(&self) -> Option<usize> {
        if self.phase == SessionPhase::Unselected {
            return None;
        }
        self.order.get(self.current_position()).copied()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_position() + 1 >= self.order.len()
    }

    /// Record the verdict for the current question and move to `Answered`.
    ///
    /// # Errors
    ///
    /// Returns the `SessionError` matching the phase when not awaiting an answer.
    pub(crate) fn record(&self, is_correct: bool) -> Result<Self, SessionError> {
        self.require_phase(SessionPhase::AwaitingAnswer)?;

        let mut next = self.clone();
        next.position = self.current_position();
        if is_correct {
            next.score += 1;
            debug_assert!(
                next.score <= next.position + 1,
                "score cannot outrun answered questions"
            );
        }
        next.answered = true;
        next.phase = SessionPhase::Answered;
        Ok(next)
    }

    /// Move past an answered question, completing the run after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` before a submission,
    /// `SessionError::Completed` once the run is over.
    pub fn advance(&self) -> Result<Self, SessionError> {
        self.require_phase(SessionPhase::Answered)?;

        let mut next = self.clone();
        next.position = self.current_position();
        if next.is_last() {
            next.phase = SessionPhase::Completed;
        } else {
            next.position += 1;
            next.answered = false;
            next.phase = SessionPhase::AwaitingAnswer;
        }
        Ok(next)
    }

    /// Drop the run entirely; a new selection pass is needed before asking again.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::unselected()
    }

    fn require_phase(&self, expected: SessionPhase) -> Result<(), SessionError> {
        if self.phase == expected {
            return Ok(());
        }
        Err(match self.phase {
            SessionPhase::Unselected => SessionError::NotSelected,
            SessionPhase::Completed => SessionError::Completed,
            SessionPhase::Answered => SessionError::AlreadyAnswered,
            SessionPhase::AwaitingAnswer => SessionError::NotAnswered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn start_selects_and_awaits_first_answer() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = SessionState::start(5, RequestedCount::new(3), &mut rng).unwrap();
        assert_eq!(state.total(), 3);
        assert_eq!(state.position(), 0);
        assert_eq!(state.score(), 0);
        assert!(!state.answered());
        assert_eq!(state.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(state.current_question(), Some(state.order()[0]));
    }

    #[test]
    fn start_over_empty_bank_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            SessionState::start(0, RequestedCount::ALL, &mut rng),
            Err(SessionError::EmptyBank)
        );
    }

    #[test]
    fn full_run_scores_correct_answers_only() {
        let mut state = SessionState::with_order(vec![2, 0, 1]).unwrap();
        for verdict in [true, false, true] {
            state = state.record(verdict).unwrap();
            assert!(state.answered());
            state = state.advance().unwrap();
        }
        assert!(state.is_complete());
        assert_eq!(state.score(), 2);
        assert_eq!(state.position(), 2);
    }

    #[test]
    fn advance_requires_an_answer() {
        let state = SessionState::with_order(vec![0, 1]).unwrap();
        assert_eq!(state.advance(), Err(SessionError::NotAnswered));
    }

    #[test]
    fn double_submit_is_rejected_and_state_kept() {
        let state = SessionState::with_order(vec![0, 1]).unwrap();
        let answered = state.record(true).unwrap();
        assert_eq!(answered.record(true), Err(SessionError::AlreadyAnswered));
        assert_eq!(answered.score(), 1);
    }

    #[test]
    fn completed_run_rejects_further_actions() {
        let state = SessionState::with_order(vec![0]).unwrap();
        let done = state.record(false).unwrap().advance().unwrap();
        assert!(done.is_complete());
        assert_eq!(done.advance(), Err(SessionError::Completed));
        assert_eq!(done.record(true), Err(SessionError::Completed));
    }

    #[test]
    fn restart_resets_everything() {
        let state = SessionState::with_order(vec![1, 0]).unwrap();
        let state = state.record(true).unwrap().advance().unwrap();
        let reset = state.restart();
        assert!(reset.order().is_empty());
        assert_eq!(reset.position(), 0);
        assert_eq!(reset.score(), 0);
        assert!(!reset.answered());
        assert_eq!(reset.phase(), SessionPhase::Unselected);
        assert_eq!(reset.current_question(), None);
        assert_eq!(reset.advance(), Err(SessionError::NotSelected));
    }

    #[test]
    fn out_of_range_position_is_clamped() {
        let state = SessionState::from_parts(
            vec![4, 2, 9],
            7,
            0,
            false,
            SessionPhase::AwaitingAnswer,
        );
        assert_eq!(state.current_position(), 0);
        assert_eq!(state.current_question(), Some(4));

        let answered = state.record(true).unwrap();
        assert_eq!(answered.position(), 0);
        assert_eq!(answered.score(), 1);
    }
}
