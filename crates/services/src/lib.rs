#![forbid(unsafe_code)]

pub mod dataset_loader;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use dataset_loader::{DatasetLoader, DatasetSource};
pub use error::{DatasetLoadError, SessionError};
pub use sessions::{QuizProgress, QuizSession};
