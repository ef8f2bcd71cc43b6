use std::path::Path;

use dioxus::prelude::*;
use quiz_core::model::{ChoiceQuestion, OrderingQuestion, QuizQuestion};
use quiz_core::session::RequestedCount;
use services::{QuizMode, QuizSession};
use tracing::{debug, warn};

use crate::context::AppContext;

/// One quiz page's live session plus the last load failure to show.
pub struct QuizSlot<Q: 'static> {
    pub quiz: Signal<QuizSession<Q>>,
    pub load_error: Signal<Option<String>>,
}

impl<Q: 'static> Clone for QuizSlot<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: 'static> Copy for QuizSlot<Q> {}

impl<Q: QuizQuestion> QuizSlot<Q> {
    fn new(quiz: QuizSession<Q>, load_error: Option<String>) -> Self {
        Self {
            quiz: Signal::new(quiz),
            load_error: Signal::new(load_error),
        }
    }

    /// Load a question file and select an order over it.
    ///
    /// On failure the message is kept for display and the live quiz is untouched.
    /// Returns true when a new bank is live.
    pub fn load_path(mut self, path: &Path) -> bool {
        let result = load_and_select(&mut *self.quiz.write(), path);
        let loaded = result.is_ok();
        self.load_error.set(result.err());
        loaded
    }

    /// Rejected advances (nothing answered yet, run already over) are logged and ignored.
    pub fn advance(mut self) {
        if let Err(err) = self.quiz.write().advance() {
            debug!(error = %err, "advance ignored");
        }
    }

    /// Start over with a fresh order, honoring the current requested count.
    pub fn restart(mut self) {
        let mut quiz = self.quiz.write();
        quiz.restart();
        quiz.refresh(&mut rand::rng());
    }

    pub fn set_requested_count(mut self, requested: RequestedCount) {
        self.quiz.write().set_requested_count(requested);
    }
}

fn load_and_select<Q: QuizQuestion>(quiz: &mut QuizSession<Q>, path: &Path) -> Result<(), String> {
    quiz.load_path(path).map_err(|err| {
        warn!(path = %path.display(), error = %err, "question file rejected");
        err.user_message()
    })?;
    quiz.refresh(&mut rand::rng());
    Ok(())
}

/// Quiz state shared by every page, so switching pages keeps progress.
#[derive(Clone, Copy)]
pub struct QuizStore {
    pub choice: QuizSlot<ChoiceQuestion>,
    pub ordering: QuizSlot<OrderingQuestion>,
    requested: Signal<u32>,
}

impl QuizStore {
    /// Build the store, loading the launch question file into the quiz for the launch mode.
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        let settings = ctx.settings();
        let requested = settings.requested_count();
        let mut choice = QuizSession::new(ctx.clock()).with_requested_count(requested);
        let mut ordering = QuizSession::new(ctx.clock()).with_requested_count(requested);

        let (mut choice_error, mut ordering_error) = (None, None);
        if let Some(path) = ctx.initial_questions() {
            match settings.mode() {
                QuizMode::Choice => choice_error = load_and_select(&mut choice, path).err(),
                QuizMode::Ordering => ordering_error = load_and_select(&mut ordering, path).err(),
            }
        }

        Self {
            choice: QuizSlot::new(choice, choice_error),
            ordering: QuizSlot::new(ordering, ordering_error),
            requested: Signal::new(settings.slider_value()),
        }
    }

    #[must_use]
    pub fn requested_count(&self) -> u32 {
        *self.requested.read()
    }

    /// Applies to both quizzes on their next load or restart.
    pub fn set_requested_count(mut self, count: u32) {
        self.requested.set(count);
        let requested = RequestedCount::new(count);
        self.choice.set_requested_count(requested);
        self.ordering.set_requested_count(requested);
    }
}

/// Create the shared store for this subtree. Call once, near the root.
pub fn use_quiz_store_provider(ctx: &AppContext) -> QuizStore {
    use_context_provider(|| QuizStore::new(ctx))
}
