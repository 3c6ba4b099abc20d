/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the item on screen; equals `total` once completed.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub is_complete: bool,
}

impl QuizProgress {
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }
}
