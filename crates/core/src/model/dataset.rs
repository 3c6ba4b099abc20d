use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::ItemId;
use crate::model::item::{ItemError, QuizItem, QuizItemDraft};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("dataset contains no items")]
    Empty,

    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),

    #[error("item {id} is invalid: {source}")]
    Item {
        id: ItemId,
        #[source]
        source: ItemError,
    },
}

/// Ordered, non-empty, read-only list of quiz items.
///
/// Order defines the presentation sequence and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    items: Vec<QuizItem>,
}

impl Dataset {
    /// # Errors
    ///
    /// Returns `DatasetError::Empty` for an empty list and
    /// `DatasetError::DuplicateId` when two items share an id.
    pub fn new(items: Vec<QuizItem>) -> Result<Self, DatasetError> {
        if items.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(DatasetError::DuplicateId(item.id()));
            }
        }
        Ok(Self { items })
    }

    /// Validates every draft, then the list as a whole.
    ///
    /// # Errors
    ///
    /// Returns the first item error wrapped in `DatasetError::Item`, or any error of
    /// [`Dataset::new`].
    pub fn from_drafts(drafts: Vec<QuizItemDraft>) -> Result<Self, DatasetError> {
        let items = drafts
            .into_iter()
            .map(|draft| {
                let id = draft.id;
                draft
                    .validate()
                    .map_err(|source| DatasetError::Item { id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a constructed dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QuizItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuizItem> {
        self.items.iter()
    }
}
