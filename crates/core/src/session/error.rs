use thiserror::Error;

/// Rejected session transitions.
///
/// These describe actions that are not valid in the current phase; they never
/// come from malformed question data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for a session")]
    EmptyBank,
    #[error("no question order has been selected yet")]
    NotSelected,
    #[error("current question already answered")]
    AlreadyAnswered,
    #[error("current question has not been answered")]
    NotAnswered,
    #[error("session already completed")]
    Completed,
}
