use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::AppContext;
use crate::store::{QuizStore, use_quiz_store_provider};
use crate::views::{ChoiceQuizView, GalleryView, OrderingQuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ChoiceQuizView)] Choice {},
        #[route("/ordering", OrderingQuizView)] Ordering {},
        #[route("/gallery", GalleryView)] Gallery {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    use_quiz_store_provider(&ctx);

    use_effect(move || {
        if ctx.take_open_ordering_on_launch() {
            let _ = navigator.replace(Route::Ordering {});
        }
    });

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_context::<QuizStore>();
    let max = ctx.settings().max_slider_count();
    let count = store.requested_count();

    rsx! {
        nav { class: "sidebar",
            h1 { "Quiz" }
            ul {
                li { Link { to: Route::Choice {}, "Multiple choice" } }
                li { Link { to: Route::Ordering {}, "Ordering" } }
                li { Link { to: Route::Gallery {}, "Concepts" } }
            }
            div { class: "sidebar__count",
                label { r#for: "question-count", "Number of questions (0 = all)" }
                input {
                    id: "question-count",
                    r#type: "range",
                    min: "0",
                    max: "{max}",
                    value: "{count}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(count) = evt.value().parse::<u32>() {
                            store.set_requested_count(count);
                        }
                    },
                }
                span { class: "sidebar__count-value", "{count}" }
            }
        }
    }
}
