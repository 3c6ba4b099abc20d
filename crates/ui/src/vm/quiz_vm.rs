use quiz_core::model::{MessageContent, QuizItem, Verdict};
use services::{QuizSession, SessionError};

use crate::vm::time_fmt::format_elapsed;

/// User actions the quiz screen understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Answer(Verdict),
    Next,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBodyVm {
    Text(String),
    Image { src: String, alt: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageCardVm {
    pub sender: String,
    pub subject: String,
    pub body: MessageBodyVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub title: &'static str,
    pub truth_label: String,
    pub indicators: Vec<String>,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percentage_label: String,
    pub message: &'static str,
    pub elapsed_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question {
        message: MessageCardVm,
        feedback: Option<FeedbackVm>,
    },
    Results(ResultsVm),
}

/// Presentation wrapper around the single `QuizSession` of the screen.
#[derive(Clone, Debug)]
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// # Errors
    ///
    /// Returns `SessionError` when the intent does not fit the current state; nothing
    /// changes in that case.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<(), SessionError> {
        match intent {
            QuizIntent::Answer(verdict) => self.session.submit_answer(verdict).map(|_| ()),
            QuizIntent::Next => self.session.advance().map(|_| ()),
            QuizIntent::Restart => {
                self.session.reset();
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.session.answered()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.session
            .current_item()
            .is_some_and(|item| item.image().is_some())
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        let progress = self.session.progress();
        format!("Question {} / {}", progress.position, progress.total)
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        match self.session.current_item() {
            Some(item) => QuizScreen::Question {
                message: map_message_card(item),
                feedback: self.feedback(item),
            },
            None => QuizScreen::Results(self.results()),
        }
    }

    fn feedback(&self, item: &QuizItem) -> Option<FeedbackVm> {
        let is_correct = self.session.is_correct()?;
        let title = if is_correct { "Correct!" } else { "Wrong" };
        let next_label = if self.session.is_last_item() {
            "See results"
        } else {
            "Next question"
        };
        Some(FeedbackVm {
            is_correct,
            title,
            truth_label: format!("This email is {}", item.truth().label()),
            indicators: item.indicators().to_vec(),
            next_label,
        })
    }

    fn results(&self) -> ResultsVm {
        let total = self.session.total();
        ResultsVm {
            score_label: format!("Your score: {} / {total}", self.session.score()),
            percentage_label: format!("{}%", self.session.score_percentage().unwrap_or(0)),
            message: self.session.verdict_message().unwrap_or_default(),
            elapsed_label: self
                .session
                .summary()
                .map(|summary| format_elapsed(summary.elapsed())),
        }
    }
}

#[must_use]
pub fn map_message_card(item: &QuizItem) -> MessageCardVm {
    let body = match item.content() {
        MessageContent::Text(text) => MessageBodyVm::Text(text.to_string()),
        MessageContent::Image(uri) => MessageBodyVm::Image {
            src: uri.to_src(),
            alt: format!("Email: {}", item.subject()),
        },
    };
    MessageCardVm {
        sender: item.sender().to_string(),
        subject: item.subject().to_string(),
        body,
    }
}
