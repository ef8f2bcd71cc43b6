/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// One-based number of the question on screen.
    pub number: usize,
    pub total: usize,
    pub score: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Question {} / {}", self.number, self.total)
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {} / {}", self.score, self.total)
    }
}
