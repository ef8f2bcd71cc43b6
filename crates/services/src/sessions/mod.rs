mod arrangement;
mod progress;
mod service;
mod view;

// Public API of the session subsystem.
pub use crate::error::QuizError;
pub use arrangement::ItemArrangement;
pub use progress::SessionProgress;
pub use service::{ChoiceQuiz, Feedback, OrderingQuiz, QuizSession};
pub use view::QuestionView;
