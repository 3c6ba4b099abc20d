use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use quiz_core::model::{Dataset, QuizItem, QuizSummary, ScoreTier, Verdict};
use quiz_core::quiz::{Advanced, Answered, QuizState};
use quiz_core::Clock;

use super::progress::QuizProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a dataset.
///
/// Owns the only `QuizState` for the run and pairs it with the dataset it was
/// started on, so positions always index into that dataset.
#[derive(Clone)]
pub struct QuizSession {
    dataset: Arc<Dataset>,
    state: QuizState,
    clock: Clock,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, clock: Clock) -> Self {
        Self {
            dataset,
            state: QuizState::new(),
            started_at: clock.now(),
            clock,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Classify the current item.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Transition` if the item was already answered or the
    /// quiz is over. The session is unchanged in that case.
    pub fn submit_answer(&mut self, verdict: Verdict) -> Result<Answered, SessionError> {
        let answered = self
            .state
            .submit_answer(&self.dataset, verdict)
            .inspect_err(|err| tracing::debug!(error = %err, "answer rejected"))?;
        tracing::debug!(
            item = %answered.item_id,
            verdict = ?answered.verdict,
            correct = answered.is_correct,
            score = answered.score,
            "answer submitted"
        );
        Ok(answered)
    }

    /// Move past the answered item.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Transition` if the current item is unanswered or the
    /// quiz is over. The session is unchanged in that case.
    pub fn advance(&mut self) -> Result<Advanced, SessionError> {
        let advanced = self
            .state
            .advance(&self.dataset)
            .inspect_err(|err| tracing::debug!(error = %err, "advance rejected"))?;
        if advanced == Advanced::Completed {
            self.completed_at = Some(self.clock.now());
            tracing::info!(
                score = self.state.score(),
                total = self.dataset.len(),
                percentage = self.score_percentage().unwrap_or_default(),
                "quiz completed"
            );
        }
        Ok(advanced)
    }

    /// Start over on the same dataset.
    pub fn reset(&mut self) {
        self.state.reset();
        self.started_at = self.clock.now();
        self.completed_at = None;
        tracing::debug!("quiz reset");
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&QuizItem> {
        self.state.current_item(&self.dataset)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.dataset.len()
    }

    #[must_use]
    pub fn is_last_item(&self) -> bool {
        self.state.current_index() >= self.dataset.last_index()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.state.answered()
    }

    #[must_use]
    pub fn user_verdict(&self) -> Option<Verdict> {
        self.state.user_verdict()
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.state.is_correct(&self.dataset)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    #[must_use]
    pub fn score_percentage(&self) -> Option<u8> {
        self.state.score_percentage(&self.dataset)
    }

    #[must_use]
    pub fn tier(&self) -> Option<ScoreTier> {
        self.state.tier(&self.dataset)
    }

    #[must_use]
    pub fn verdict_message(&self) -> Option<&'static str> {
        self.state.verdict_message(&self.dataset)
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.total();
        QuizProgress {
            position: (self.state.current_index() + 1).min(total),
            total,
            answered: self.state.answered_count(),
            is_complete: self.is_complete(),
        }
    }

    /// Final summary; `None` until the quiz is completed.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        let completed_at = self.completed_at?;
        let total = u32::try_from(self.total()).unwrap_or(u32::MAX);
        QuizSummary::new(self.score(), total, self.started_at, completed_at).ok()
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("items", &self.dataset.len())
            .field("state", &self.state)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
