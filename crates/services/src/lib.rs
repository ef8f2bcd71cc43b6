#![forbid(unsafe_code)]

pub mod error;
pub mod gallery;
pub mod loader;
pub mod media;
pub mod sessions;
pub mod settings;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{GalleryError, LoadError, MediaError, QuizError};
pub use gallery::{GalleryFolders, ImageGallery};
pub use loader::BankLoader;
pub use media::{MediaRef, MediaResolver, Playback, ResolvedImage, ResolvedSound};
pub use settings::{QuizMode, QuizSettings};

pub use sessions::{
    ChoiceQuiz, Feedback, ItemArrangement, OrderingQuiz, QuestionView, QuizSession,
    SessionProgress,
};
