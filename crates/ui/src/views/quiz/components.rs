use dioxus::prelude::*;
use quiz_core::model::Verdict;

use crate::vm::{FeedbackVm, MessageBodyVm, MessageCardVm, QuizIntent, ResultsVm};

#[component]
pub(super) fn InstructionsCard() -> Element {
    rsx! {
        section { class: "card card--muted quiz-instructions",
            h2 { class: "card__title", "✉ Look at this email carefully" }
            p { class: "card__description",
                "Decide whether it is a legitimate email or a scam trying to steal your data."
            }
        }
    }
}

#[component]
pub(super) fn MessageCard(message: MessageCardVm, on_zoom: EventHandler<()>) -> Element {
    rsx! {
        section { class: "card quiz-message",
            dl { class: "quiz-message__meta",
                dt { "From" }
                dd { "{message.sender}" }
                dt { "Subject" }
                dd { "{message.subject}" }
            }
            match &message.body {
                MessageBodyVm::Text(text) => rsx! {
                    pre { class: "quiz-message__body", "{text}" }
                },
                MessageBodyVm::Image { src, alt } => rsx! {
                    button {
                        class: "quiz-message__image",
                        id: "quiz-image",
                        r#type: "button",
                        title: "Zoom",
                        onclick: move |_| on_zoom.call(()),
                        img { src: "{src}", alt: "{alt}" }
                        span { class: "quiz-message__zoom", aria_hidden: "true", "🔍" }
                    }
                },
            }
        }
    }
}

#[component]
pub(super) fn AnswerButtons(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-answers",
            button {
                class: "quiz-answer quiz-answer--legit",
                id: "quiz-answer-legit",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Answer(Verdict::Legitimate)),
                span { class: "quiz-answer__icon", "✔" }
                span { class: "quiz-answer__label", "Legitimate email" }
                span { class: "quiz-answer__hint", "This email is safe" }
            }
            button {
                class: "quiz-answer quiz-answer--scam",
                id: "quiz-answer-scam",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Answer(Verdict::Fraudulent)),
                span { class: "quiz-answer__icon", "⚠" }
                span { class: "quiz-answer__label", "Scam" }
                span { class: "quiz-answer__hint", "This email is suspicious" }
            }
        }
    }
}

#[component]
pub(super) fn FeedbackCard(feedback: FeedbackVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let (variant, icon) = if feedback.is_correct {
        ("card quiz-feedback quiz-feedback--correct", "✔")
    } else {
        ("card quiz-feedback quiz-feedback--wrong", "✘")
    };

    rsx! {
        section { class: "{variant}", id: "quiz-feedback",
            h2 { class: "quiz-feedback__title", "{icon} {feedback.title}" }
            p { class: "quiz-feedback__truth", "{feedback.truth_label}" }
            if !feedback.indicators.is_empty() {
                p { class: "quiz-feedback__flags-title", "Warning signs to watch for:" }
                ul { class: "quiz-feedback__flags",
                    for (idx, flag) in feedback.indicators.iter().enumerate() {
                        li { key: "{idx}", class: "quiz-feedback__flag",
                            span { class: "quiz-feedback__flag-icon", aria_hidden: "true", "⚠" }
                            span { "{flag}" }
                        }
                    }
                }
            }
            button {
                class: "btn btn-primary quiz-next",
                id: "quiz-next",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "{feedback.next_label}"
            }
        }
    }
}

#[component]
pub(super) fn ResultsCard(results: ResultsVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "card quiz-results", id: "quiz-results",
            div { class: "quiz-results__badge", aria_hidden: "true", "🛡" }
            h2 { class: "quiz-results__title", "Quiz complete!" }
            p { class: "quiz-results__score", "{results.score_label}" }
            div { class: "quiz-results__percentage", "{results.percentage_label}" }
            p { class: "quiz-results__message", "{results.message}" }
            if let Some(elapsed) = &results.elapsed_label {
                p { class: "quiz-results__elapsed", "Time: {elapsed}" }
            }
            button {
                class: "btn btn-primary quiz-restart",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Start over"
            }
        }
    }
}

#[component]
pub(super) fn ImagePreview(src: String, alt: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "image-preview",
            id: "quiz-image-preview",
            role: "dialog",
            aria_modal: "true",
            aria_label: "Email preview",
            title: "Close",
            onclick: move |_| on_close.call(()),
            img { class: "image-preview__img", src: "{src}", alt: "{alt}" }
        }
    }
}
