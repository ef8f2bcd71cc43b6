use std::path::{Path, PathBuf};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use services::{Clock, MediaResolver, QuizMode, QuizSettings};

pub trait UiApp: Send + Sync {
    fn settings(&self) -> QuizSettings;

    /// Question file to load before the first render, if any.
    fn initial_questions(&self) -> Option<PathBuf>;

    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    settings: QuizSettings,
    initial_questions: Option<PathBuf>,
    clock: Clock,
    open_ordering_on_launch: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let settings = app.settings();
        let open_ordering = settings.mode() == QuizMode::Ordering;

        Self {
            initial_questions: app.initial_questions(),
            clock: app.clock(),
            open_ordering_on_launch: Arc::new(AtomicBool::new(open_ordering)),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn initial_questions(&self) -> Option<&Path> {
        self.initial_questions.as_deref()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn media_resolver(&self) -> MediaResolver {
        MediaResolver::new(self.settings.media_volume())
    }

    /// True exactly once when the app was launched in ordering mode.
    #[must_use]
    pub fn take_open_ordering_on_launch(&self) -> bool {
        self.open_ordering_on_launch.swap(false, Ordering::AcqRel)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
