#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;
pub mod time;

pub use quiz::{Advanced, Answered, QuizPhase, QuizState, TransitionError};
pub use time::Clock;
