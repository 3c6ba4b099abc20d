//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::DatasetError;
use quiz_core::quiz::TransitionError;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Errors emitted while loading a dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetLoadError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] DatasetError),
}
