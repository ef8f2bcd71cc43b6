use std::path::Path;

use dioxus::prelude::*;
use quiz_core::model::OrderingQuestion;
use services::ItemArrangement;
use tracing::debug;

use crate::context::AppContext;
use crate::store::{QuizSlot, QuizStore};
use crate::vm::{
    EMPTY_BANK_MESSAGE, OrderingIntent, OrderingQuestionVm, QuizScreen, UPLOAD_PROMPT,
    arrangement_keys, current_arrangement, map_ordering_screen,
};

use super::loader::BankPicker;
use super::media::QuestionImage;
use super::notice::{Notice, NoticeKind};
use super::question::{CompletionPanel, QuestionFooter};

const ITEM_IMAGE_WIDTH: u32 = 250;

#[component]
pub fn OrderingQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_context::<QuizStore>();
    let slot = store.ordering;
    let resolver = ctx.media_resolver();
    // `None` means "as loaded"; reset whenever a different question comes up.
    let mut arrangement = use_signal(|| None::<ItemArrangement>);

    let dispatch = use_callback(move |intent: OrderingIntent| match intent {
        OrderingIntent::Load(path) => {
            if slot.load_path(Path::new(&path)) {
                arrangement.set(None);
            }
        }
        OrderingIntent::MoveLeft(index) => rearrange(slot, arrangement, |items| items.move_left(index)),
        OrderingIntent::MoveRight(index) => rearrange(slot, arrangement, |items| items.move_right(index)),
        OrderingIntent::Submit => {
            let mut quiz = slot.quiz;
            let keys = quiz
                .read()
                .current()
                .map(|question| arrangement_keys(question, arrangement.read().as_ref()))
                .unwrap_or_default();
            if let Err(err) = quiz.write().submit_order(keys.as_slice()) {
                debug!(error = %err, "submit ignored");
            }
        }
        OrderingIntent::Advance => {
            slot.advance();
            arrangement.set(None);
        }
        OrderingIntent::Restart => {
            slot.restart();
            arrangement.set(None);
        }
    });

    let screen = map_ordering_screen(&slot.quiz.read(), arrangement.read().as_ref(), &resolver);
    let load_error = slot.load_error.read().clone();

    rsx! {
        div { class: "page quiz-page",
            h2 { "Quiz App" }
            BankPicker {
                label: "Upload JSON",
                on_load: move |path| dispatch.call(OrderingIntent::Load(path)),
                error: load_error,
            }
            match screen {
                QuizScreen::AwaitingBank => rsx! {
                    Notice { kind: NoticeKind::Info, message: UPLOAD_PROMPT.to_string() }
                },
                QuizScreen::EmptyBank => rsx! {
                    Notice { kind: NoticeKind::Warning, message: EMPTY_BANK_MESSAGE.to_string() }
                },
                QuizScreen::Completed(completion) => rsx! {
                    CompletionPanel {
                        completion,
                        on_restart: move |()| dispatch.call(OrderingIntent::Restart),
                    }
                },
                QuizScreen::Question(vm) => rsx! {
                    OrderingQuestionPanel { vm, dispatch }
                },
            }
        }
    }
}

/// Apply a move to the arrangement of the question on screen.
fn rearrange(
    slot: QuizSlot<OrderingQuestion>,
    mut arrangement: Signal<Option<ItemArrangement>>,
    apply: impl FnOnce(&mut ItemArrangement),
) {
    let mut next = {
        let quiz = slot.quiz.read();
        let Some(question) = quiz.current() else {
            return;
        };
        current_arrangement(question, arrangement.read().as_ref())
    };
    apply(&mut next);
    arrangement.set(Some(next));
}

#[component]
fn OrderingQuestionPanel(vm: OrderingQuestionVm, dispatch: Callback<OrderingIntent>) -> Element {
    let chrome = vm.chrome;
    let locked = !chrome.can_submit;
    let last = vm.items.len().saturating_sub(1);

    rsx! {
        section { class: "question",
            h4 { class: "question__heading", "{chrome.heading}" }
            div { class: "question__text", dangerous_inner_html: "{chrome.text_html}" }
            ol { class: "ordering",
                for (index, item) in vm.items.into_iter().enumerate() {
                    li { key: "{item.key}", class: "ordering__item",
                        if let Some(image) = item.image {
                            QuestionImage { image, width: ITEM_IMAGE_WIDTH }
                        }
                        span { class: "ordering__label", "{item.label}" }
                        div { class: "ordering__moves",
                            button {
                                class: "btn btn-small",
                                r#type: "button",
                                title: "Move earlier",
                                disabled: locked || index == 0,
                                onclick: move |_| dispatch.call(OrderingIntent::MoveLeft(index)),
                                "◀"
                            }
                            button {
                                class: "btn btn-small",
                                r#type: "button",
                                title: "Move later",
                                disabled: locked || index == last,
                                onclick: move |_| dispatch.call(OrderingIntent::MoveRight(index)),
                                "▶"
                            }
                        }
                    }
                }
            }
            QuestionFooter {
                chrome: chrome.clone(),
                on_submit: move |()| dispatch.call(OrderingIntent::Submit),
                on_advance: move |()| dispatch.call(OrderingIntent::Advance),
            }
        }
    }
}
