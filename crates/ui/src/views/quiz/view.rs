use dioxus::prelude::*;
use quiz_core::model::Verdict;

use crate::context::AppContext;
use crate::vm::{MessageBodyVm, QuizIntent, QuizScreen, QuizVm};
use super::components::{
    AnswerButtons, FeedbackCard, ImagePreview, InstructionsCard, MessageCard, ResultsCard,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Maps a key press to an intent allowed in the current state.
fn intent_for_key(key: &Key, answered: bool, completed: bool) -> Option<QuizIntent> {
    match key {
        Key::Enter if answered => Some(QuizIntent::Next),
        Key::Character(value) => match value.to_ascii_lowercase().as_str() {
            "l" if !answered && !completed => Some(QuizIntent::Answer(Verdict::Legitimate)),
            "s" if !answered && !completed => Some(QuizIntent::Answer(Verdict::Fraudulent)),
            "r" if completed => Some(QuizIntent::Restart),
            _ => None,
        },
        _ => None,
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_string();

    let vm = use_signal(|| QuizVm::new(ctx.new_session()));
    let mut preview_open = use_signal(|| false);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut preview_open = preview_open;
        if let Err(err) = vm.write().apply(intent) {
            tracing::debug!(?intent, error = %err, "quiz intent ignored");
            return;
        }
        if matches!(intent, QuizIntent::Next | QuizIntent::Restart) {
            preview_open.set(false);
        }
    });

    let open_preview = use_callback(move |()| preview_open.set(true));
    let close_preview = use_callback(move |()| preview_open.set(false));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm, open_preview, close_preview);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let key = evt.data.key();
        if key == Key::Escape {
            if preview_open() {
                evt.prevent_default();
                close_preview.call(());
            }
            return;
        }
        let (answered, completed) = {
            let guard = vm.read();
            (guard.is_answered(), guard.is_complete())
        };
        if let Some(intent) = intent_for_key(&key, answered, completed) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    });

    let vm_guard = vm.read();
    let progress_label = vm_guard.progress_label();
    let screen = vm_guard.screen();
    drop(vm_guard);

    let preview = match &screen {
        QuizScreen::Question { message, .. } if preview_open() => match &message.body {
            MessageBodyVm::Image { src, alt } => Some((src.clone(), alt.clone())),
            MessageBodyVm::Text(_) => None,
        },
        _ => None,
    };

    rsx! {
        div {
            class: "quiz-page",
            id: "quiz-root",
            tabindex: "0",
            onkeydown: on_key,
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            header { class: "quiz-header",
                div { class: "quiz-header__brand",
                    span { class: "quiz-header__icon", aria_hidden: "true", "🛡" }
                    h1 { class: "quiz-header__title", "{title}" }
                }
                span { class: "badge", id: "quiz-progress", "{progress_label}" }
            }
            main { class: "quiz-main",
                match screen {
                    QuizScreen::Question { message, feedback } => rsx! {
                        InstructionsCard {}
                        MessageCard {
                            message,
                            on_zoom: open_preview,
                        }
                        match feedback {
                            None => rsx! {
                                AnswerButtons { on_intent: dispatch }
                            },
                            Some(feedback) => rsx! {
                                FeedbackCard { feedback, on_intent: dispatch }
                            },
                        }
                    },
                    QuizScreen::Results(results) => rsx! {
                        ResultsCard { results, on_intent: dispatch }
                    },
                }
            }
            if let Some((src, alt)) = preview {
                ImagePreview { src, alt, on_close: close_preview }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
    open_preview: Rc<RefCell<Option<Callback<()>>>>,
    close_preview: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        vm: Signal<QuizVm>,
        open_preview: Callback<()>,
        close_preview: Callback<()>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
        *self.open_preview.borrow_mut() = Some(open_preview);
        *self.close_preview.borrow_mut() = Some(close_preview);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }

    pub(crate) fn open_preview(&self) -> Callback<()> {
        (*self.open_preview.borrow()).expect("preview opener registered")
    }

    pub(crate) fn close_preview(&self) -> Callback<()> {
        (*self.close_preview.borrow()).expect("preview closer registered")
    }
}
