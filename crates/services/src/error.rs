//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{BankError, SummaryError};
use quiz_core::session::SessionError;

/// Errors emitted while loading a question bank.
///
/// A failed load never touches the live session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error(transparent)]
    InvalidFormat(#[from] BankError),
    #[error("questions file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Message suitable for showing next to the upload control.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Errors emitted by quiz session controllers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Media that cannot be turned into something renderable.
///
/// Always non-fatal: the question is still shown, with a warning instead of the media.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MediaError {
    #[error("Unable to decode image data URL.")]
    ImageDataUrl,
    #[error("Unable to display image for this question.")]
    UnsupportedImage,
    #[error("Unsupported playsound string format.")]
    UnsupportedSoundFormat,
    #[error("Unable to play provided playsound content.")]
    UnplayableSound,
    #[error("Could not play sound/video: {reason}")]
    SoundDecode { reason: String },
}

/// Errors emitted while browsing the image gallery.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GalleryError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
