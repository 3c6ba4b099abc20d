//! Quiz progression state machine.
//!
//! `QuizState` is a plain value: it knows the position, the answer for the current
//! item and the running score, and reads the ground truth from the [`Dataset`] passed
//! to each call. The same dataset must be used for the lifetime of a state.

use thiserror::Error;

use crate::model::{Dataset, ItemId, QuizItem, ScoreTier, Verdict, score_percentage};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A transition whose precondition does not hold. The state is left untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("the current item has already been answered")]
    AlreadyAnswered,

    #[error("the current item has not been answered yet")]
    NotAnswered,

    #[error("the quiz is already completed")]
    Completed,

    #[error("item index {index} is outside a dataset of {len} items")]
    ItemOutOfRange { index: usize, len: usize },
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Where the quiz is for the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for a verdict on the current item.
    Awaiting,
    /// The user answered the current item.
    Answered(Verdict),
    /// The user advanced past the last item.
    Completed,
}

/// Outcome of a successful `submit_answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answered {
    pub item_id: ItemId,
    pub verdict: Verdict,
    pub is_correct: bool,
    pub score: u32,
}

/// Outcome of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advanced {
    /// Moved to the item at this index.
    Next(usize),
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    current_index: usize,
    score: u32,
    phase: QuizPhase,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizState {
    /// Fresh state positioned on the first item.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_index: 0,
            score: 0,
            phase: QuizPhase::Awaiting,
        }
    }

    /// Records the verdict for the current item and scores it.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::AlreadyAnswered` or `TransitionError::Completed` when
    /// the current item cannot take an answer.
    pub fn submit_answer(
        &mut self,
        dataset: &Dataset,
        verdict: Verdict,
    ) -> Result<Answered, TransitionError> {
        match self.phase {
            QuizPhase::Awaiting => {}
            QuizPhase::Answered(_) => return Err(TransitionError::AlreadyAnswered),
            QuizPhase::Completed => return Err(TransitionError::Completed),
        }
        let item = self.item_at(dataset)?;
        let is_correct = item.is_correct(verdict);

        self.phase = QuizPhase::Answered(verdict);
        if is_correct {
            self.score = self.score.saturating_add(1);
        }

        Ok(Answered {
            item_id: item.id(),
            verdict,
            is_correct,
            score: self.score,
        })
    }

    /// Moves to the next item, or to `Completed` after the last one.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::NotAnswered` before the current item is answered and
    /// `TransitionError::Completed` once the quiz is over.
    pub fn advance(&mut self, dataset: &Dataset) -> Result<Advanced, TransitionError> {
        match self.phase {
            QuizPhase::Answered(_) => {}
            QuizPhase::Awaiting => return Err(TransitionError::NotAnswered),
            QuizPhase::Completed => return Err(TransitionError::Completed),
        }
        self.item_at(dataset)?;

        if self.current_index >= dataset.last_index() {
            self.phase = QuizPhase::Completed;
            return Ok(Advanced::Completed);
        }

        self.current_index += 1;
        self.phase = QuizPhase::Awaiting;
        Ok(Advanced::Next(self.current_index))
    }

    /// Back to the first item with a zero score. Valid from any state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        matches!(self.phase, QuizPhase::Answered(_))
    }

    #[must_use]
    pub fn user_verdict(&self) -> Option<Verdict> {
        match self.phase {
            QuizPhase::Answered(verdict) => Some(verdict),
            QuizPhase::Awaiting | QuizPhase::Completed => None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, QuizPhase::Completed)
    }

    /// Number of items that have received an answer so far.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        match self.phase {
            QuizPhase::Awaiting => self.current_index,
            QuizPhase::Answered(_) | QuizPhase::Completed => self.current_index + 1,
        }
    }

    #[must_use]
    pub fn current_item<'a>(&self, dataset: &'a Dataset) -> Option<&'a QuizItem> {
        if self.is_complete() {
            return None;
        }
        dataset.get(self.current_index)
    }

    /// Whether the submitted verdict matches the ground truth; `None` until answered.
    #[must_use]
    pub fn is_correct(&self, dataset: &Dataset) -> Option<bool> {
        let verdict = self.user_verdict()?;
        self.current_item(dataset)
            .map(|item| item.is_correct(verdict))
    }

    /// Final percentage; `None` while the quiz is still running.
    #[must_use]
    pub fn score_percentage(&self, dataset: &Dataset) -> Option<u8> {
        self.is_complete()
            .then(|| score_percentage(self.score, total_of(dataset)))
    }

    #[must_use]
    pub fn tier(&self, dataset: &Dataset) -> Option<ScoreTier> {
        self.is_complete()
            .then(|| ScoreTier::from_score(self.score, total_of(dataset)))
    }

    /// Tier message for the final score; `None` while the quiz is still running.
    #[must_use]
    pub fn verdict_message(&self, dataset: &Dataset) -> Option<&'static str> {
        self.tier(dataset).map(ScoreTier::message)
    }

    fn item_at<'a>(&self, dataset: &'a Dataset) -> Result<&'a QuizItem, TransitionError> {
        dataset
            .get(self.current_index)
            .ok_or(TransitionError::ItemOutOfRange {
                index: self.current_index,
                len: dataset.len(),
            })
    }
}

pub(crate) fn total_of(dataset: &Dataset) -> u32 {
    u32::try_from(dataset.len()).unwrap_or(u32::MAX)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
