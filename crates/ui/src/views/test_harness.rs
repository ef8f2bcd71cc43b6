use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_clock;
use services::{Clock, QuizSettings};

use crate::context::{UiApp, build_app_context};
use crate::store::{QuizStore, use_quiz_store_provider};
use crate::views::{ChoiceQuizView, GalleryView, OrderingQuizView};

struct TestApp {
    settings: QuizSettings,
    questions: Option<PathBuf>,
}

impl UiApp for TestApp {
    fn settings(&self) -> QuizSettings {
        self.settings.clone()
    }

    fn initial_questions(&self) -> Option<PathBuf> {
        self.questions.clone()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Choice,
    Ordering,
    Gallery,
}

/// Lets a test reach the store the harness created.
#[derive(Clone, Default)]
struct StoreHandle(Rc<RefCell<Option<QuizStore>>>);

impl StoreHandle {
    fn register(&self, store: QuizStore) {
        self.0.borrow_mut().get_or_insert(store);
    }

    fn get(&self) -> QuizStore {
        (*self.0.borrow()).expect("store registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    store: StoreHandle,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let store = use_quiz_store_provider(&ctx);
    props.store.register(store);
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Choice => rsx! { ChoiceQuizView {} },
        ViewKind::Ordering => rsx! { OrderingQuizView {} },
        ViewKind::Gallery => rsx! { GalleryView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    store: StoreHandle,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Act on the shared store the way an event handler would, then re-render.
    pub fn with_store<O>(&mut self, action: impl FnOnce(QuizStore) -> O) -> O {
        let store = self.store.get();
        let out = self.dom.in_runtime(|| action(store));
        drive_dom(&mut self.dom);
        out
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    settings: QuizSettings,
    questions: Option<PathBuf>,
) -> ViewHarness {
    let store = StoreHandle::default();
    let app = Arc::new(TestApp {
        settings,
        questions,
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            store: store.clone(),
        },
    );
    ViewHarness { dom, store }
}
