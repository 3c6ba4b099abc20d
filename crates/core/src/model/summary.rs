use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::tier::{ScoreTier, score_percentage};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total ({total})")]
    ScoreOutOfRange { score: u32, total: u32 },

    #[error("a summary needs at least one item")]
    EmptyQuiz,
}

/// Final result of a completed quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    total: u32,
    score: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `QuizSummaryError` when the counts or timestamps are inconsistent.
    pub fn new(
        score: u32,
        total: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if total == 0 {
            return Err(QuizSummaryError::EmptyQuiz);
        }
        if score > total {
            return Err(QuizSummaryError::ScoreOutOfRange { score, total });
        }
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        Ok(Self {
            total,
            score,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        score_percentage(self.score, self.total)
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score, self.total)
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
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
