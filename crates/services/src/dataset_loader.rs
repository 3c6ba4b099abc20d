use std::fmt;
use std::path::{Path, PathBuf};

use quiz_core::model::{Dataset, QuizItemDraft};

use crate::error::DatasetLoadError;

const BUNDLED_DATASET: &str = include_str!("../data/default_dataset.json");

/// Where the quiz content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
    /// The sample messages shipped with the binary.
    #[default]
    Bundled,
    /// A JSON array of item drafts on disk.
    File(PathBuf),
}

impl DatasetSource {
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Bundled, Self::File)
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Bundled => write!(f, "bundled"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads and validates quiz datasets. Validation happens once, here, before any
/// session can be created.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetLoader;

impl DatasetLoader {
    /// # Errors
    ///
    /// Returns `DatasetLoadError` if the source cannot be read, parsed or validated.
    pub fn load(source: &DatasetSource) -> Result<Dataset, DatasetLoadError> {
        let dataset = match source {
            DatasetSource::Bundled => Self::bundled()?,
            DatasetSource::File(path) => Self::from_path(path)?,
        };
        tracing::info!(source = %source, items = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    /// # Errors
    ///
    /// Fails only if the embedded dataset is malformed.
    pub fn bundled() -> Result<Dataset, DatasetLoadError> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// # Errors
    ///
    /// Returns `DatasetLoadError::Io` when the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Dataset, DatasetLoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// # Errors
    ///
    /// Returns `DatasetLoadError::Parse` for malformed JSON and
    /// `DatasetLoadError::Invalid` when the items fail validation.
    pub fn from_json_str(raw: &str) -> Result<Dataset, DatasetLoadError> {
        let drafts: Vec<QuizItemDraft> = serde_json::from_str(raw)?;
        Ok(Dataset::from_drafts(drafts)?)
    }
}
