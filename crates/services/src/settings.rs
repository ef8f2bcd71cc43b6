use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use quiz_core::session::RequestedCount;
use serde::{Deserialize, Serialize};

use crate::gallery::DEFAULT_GALLERY_ROOT;

/// Starting volume for audio and video players.
pub const DEFAULT_MEDIA_VOLUME: f32 = 0.2;

/// Upper bound of the "number of questions" slider.
pub const DEFAULT_MAX_SLIDER_COUNT: u32 = 10;

/// Which kind of question bank the player is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    #[default]
    Choice,
    Ordering,
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizMode::Choice => write!(f, "choice"),
            QuizMode::Ordering => write!(f, "ordering"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quiz mode: {} (expected choice or ordering)", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for QuizMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "choice" | "mc" | "multiple-choice" => Ok(Self::Choice),
            "ordering" | "order" => Ok(Self::Ordering),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Player configuration shared by the binary and the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSettings {
    requested_count: u32,
    max_slider_count: u32,
    media_volume: f32,
    gallery_root: PathBuf,
    mode: QuizMode,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            requested_count: 0,
            max_slider_count: DEFAULT_MAX_SLIDER_COUNT,
            media_volume: DEFAULT_MEDIA_VOLUME,
            gallery_root: PathBuf::from(DEFAULT_GALLERY_ROOT),
            mode: QuizMode::default(),
        }
    }
}

impl QuizSettings {
    #[must_use]
    pub fn with_requested_count(mut self, count: u32) -> Self {
        self.requested_count = count;
        self
    }

    #[must_use]
    pub fn with_gallery_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.gallery_root = root.into();
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: QuizMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn requested_count(&self) -> RequestedCount {
        RequestedCount::new(self.requested_count)
    }

    #[must_use]
    pub fn max_slider_count(&self) -> u32 {
        self.max_slider_count
    }

    /// Slider position for the configured count, kept inside the slider range.
    #[must_use]
    pub fn slider_value(&self) -> u32 {
        self.requested_count.min(self.max_slider_count)
    }

    #[must_use]
    pub fn media_volume(&self) -> f32 {
        self.media_volume
    }

    #[must_use]
    pub fn gallery_root(&self) -> &PathBuf {
        &self.gallery_root
    }

    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
    }
}
