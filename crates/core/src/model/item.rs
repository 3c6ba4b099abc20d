use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::ItemId;
use crate::model::media::{MediaError, MediaUri};
use crate::model::verdict::Verdict;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ItemError {
    #[error("sender cannot be empty")]
    BlankSender,

    #[error("subject cannot be empty")]
    BlankSubject,

    #[error("body cannot be empty without an image")]
    BlankBody,

    #[error("a fraudulent item needs at least one indicator")]
    MissingIndicators,

    #[error("indicator {index} is empty")]
    BlankIndicator { index: usize },

    #[error(transparent)]
    Media(#[from] MediaError),
}

//
// ─── DRAFT (unvalidated input) ─────────────────────────────────────────────────
//

/// Quiz item as written by a dataset author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItemDraft {
    pub id: ItemId,
    pub sender: String,
    pub subject: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_fraudulent: bool,
    #[serde(default)]
    pub indicators: Vec<String>,
}

impl QuizItemDraft {
    pub fn validate(self) -> Result<QuizItem, ItemError> {
        if self.sender.trim().is_empty() {
            return Err(ItemError::BlankSender);
        }
        if self.subject.trim().is_empty() {
            return Err(ItemError::BlankSubject);
        }
        if self.body.trim().is_empty() && self.image.is_none() {
            return Err(ItemError::BlankBody);
        }
        if let Some(index) = self.indicators.iter().position(|i| i.trim().is_empty()) {
            return Err(ItemError::BlankIndicator { index });
        }
        if self.is_fraudulent && self.indicators.is_empty() {
            return Err(ItemError::MissingIndicators);
        }

        let image = self.image.map(MediaUri::parse).transpose()?;

        Ok(QuizItem {
            id: self.id,
            sender: self.sender,
            subject: self.subject,
            body: self.body,
            image,
            truth: Verdict::from_fraudulent(self.is_fraudulent),
            indicators: self.indicators,
        })
    }
}

//
// ─── VALIDATED ITEM ────────────────────────────────────────────────────────────
//

/// One sample message with its ground-truth classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    id: ItemId,
    sender: String,
    subject: String,
    body: String,
    image: Option<MediaUri>,
    truth: Verdict,
    indicators: Vec<String>,
}

/// What is actually rendered for a message: the screenshot wins over the body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageContent<'a> {
    Text(&'a str),
    Image(&'a MediaUri),
}

impl QuizItem {
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaUri> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn content(&self) -> MessageContent<'_> {
        match &self.image {
            Some(uri) => MessageContent::Image(uri),
            None => MessageContent::Text(&self.body),
        }
    }

    #[must_use]
    pub fn truth(&self) -> Verdict {
        self.truth
    }

    #[must_use]
    pub fn is_fraudulent(&self) -> bool {
        self.truth.is_fraudulent()
    }

    /// Cues shown after an answer. Empty for legitimate items.
    #[must_use]
    pub fn indicators(&self) -> &[String] {
        if self.is_fraudulent() {
            &self.indicators
        } else {
            &[]
        }
    }

    #[must_use]
    pub fn is_correct(&self, verdict: Verdict) -> bool {
        self.truth == verdict
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
