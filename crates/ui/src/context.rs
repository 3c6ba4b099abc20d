use std::sync::Arc;

use quiz_core::model::Dataset;
use services::{Clock, QuizSession};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn dataset(&self) -> Arc<Dataset>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    title: Arc<str>,
    dataset: Arc<Dataset>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: Arc::from(app.title()),
            dataset: app.dataset(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    /// Start a fresh quiz run over the shared dataset.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(self.dataset(), self.clock)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
