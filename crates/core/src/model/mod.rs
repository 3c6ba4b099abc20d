mod dataset;
mod ids;
mod item;
mod media;
mod summary;
mod tier;
mod verdict;

pub use dataset::{Dataset, DatasetError};
pub use ids::{ItemId, ParseItemIdError};
pub use item::{ItemError, MessageContent, QuizItem, QuizItemDraft};
pub use media::{MediaError, MediaUri};
pub use summary::{QuizSummary, QuizSummaryError};
pub use tier::{ScoreTier, score_percentage};
pub use verdict::Verdict;
