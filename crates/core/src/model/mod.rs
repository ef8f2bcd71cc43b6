mod bank;
mod ids;
pub mod media;
mod question;
mod summary;

pub use bank::{BankError, FormatIssue, QuestionBank};
pub use ids::BankGeneration;
pub use media::{IMAGE_KEYS, MediaField, MediaSlot, SOUND_KEYS};
pub use question::{
    ChoiceQuestion, NOT_AVAILABLE, OrderingItem, OrderingQuestion, QuizQuestion,
};
pub use summary::{QuizSummary, SummaryError};
