mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{
    FeedbackVm, MessageBodyVm, MessageCardVm, QuizIntent, QuizScreen, QuizVm, ResultsVm,
    map_message_card,
};
pub use time_fmt::format_elapsed;
