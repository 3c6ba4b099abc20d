use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Dataset, ItemId, QuizItemDraft};
use quiz_core::time::fixed_clock;
use services::Clock;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::{QuizIntent, QuizVm};

struct TestApp {
    dataset: Arc<Dataset>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Phishing awareness quiz".to_string()
    }

    fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizHarnessRoot(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

/// One sample item: `(is_fraudulent, image)`.
pub type SampleItem = (bool, Option<&'static str>);

#[must_use]
pub fn sample_dataset(items: &[SampleItem]) -> Dataset {
    let drafts = items
        .iter()
        .zip(1_u64..)
        .map(|(&(is_fraudulent, image), id)| QuizItemDraft {
            id: ItemId::new(id),
            sender: format!("sender{id}@example.com"),
            subject: format!("Subject {id}"),
            body: format!("Body of message {id}"),
            image: image.map(str::to_string),
            is_fraudulent,
            indicators: if is_fraudulent {
                vec![format!("Red flag {id}a"), format!("Red flag {id}b")]
            } else {
                Vec::new()
            },
        })
        .collect();
    Dataset::from_drafts(drafts).expect("valid sample dataset")
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl QuizHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Same callback the image button fires on click.
    pub fn open_preview(&mut self) {
        let open = self.handles.open_preview();
        self.dom.in_runtime(|| open.call(()));
        drive_dom(&mut self.dom);
    }

    /// Same callback the preview overlay and Escape fire.
    pub fn close_preview(&mut self) {
        let close = self.handles.close_preview();
        self.dom.in_runtime(|| close.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn with_vm<T>(&self, f: impl FnOnce(&QuizVm) -> T) -> T {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| f(&vm.read()))
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(dataset: Dataset) -> QuizHarness {
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        dataset: Arc::new(dataset),
    });
    let dom = VirtualDom::new_with_props(
        QuizHarnessRoot,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    let mut harness = QuizHarness { dom, handles };
    harness.rebuild();
    harness
}
