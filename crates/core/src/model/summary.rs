use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds question count ({total})")]
    ScoreExceedsTotal { score: usize, total: usize },
}

/// Final result of a completed quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    score: usize,
    total: usize,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SummaryError::ScoreExceedsTotal` if the score is larger than the run.
    pub fn new(
        score: usize,
        total: usize,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if score > total {
            return Err(SummaryError::ScoreExceedsTotal { score, total });
        }
        Ok(Self {
            score,
            total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!("Quiz completed! Score: {} / {}", self.score, self.total)
    }
}
