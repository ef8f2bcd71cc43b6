use std::path::Path;

use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::store::QuizStore;
use crate::vm::{
    ChoiceIntent, ChoiceQuestionVm, EMPTY_BANK_MESSAGE, QuizScreen, UPLOAD_PROMPT,
    map_choice_screen,
};

use super::loader::BankPicker;
use super::media::{QuestionImage, SoundPlayer};
use super::notice::{Notice, NoticeKind};
use super::question::{CompletionPanel, QuestionFooter};

#[component]
pub fn ChoiceQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_context::<QuizStore>();
    let slot = store.choice;
    let resolver = ctx.media_resolver();
    let mut selected = use_signal(|| 0_usize);

    let dispatch = use_callback(move |intent: ChoiceIntent| match intent {
        ChoiceIntent::Load(path) => {
            if slot.load_path(Path::new(&path)) {
                selected.set(0);
            }
        }
        ChoiceIntent::Select(index) => selected.set(index),
        ChoiceIntent::Submit => {
            let mut quiz = slot.quiz;
            // A question without options is still gradable; it is simply wrong.
            let answer = quiz
                .read()
                .current()
                .and_then(|question| question.options().get(selected()).cloned())
                .unwrap_or_default();
            if let Err(err) = quiz.write().submit_answer(&answer) {
                debug!(error = %err, "submit ignored");
            }
        }
        ChoiceIntent::Advance => {
            slot.advance();
            selected.set(0);
        }
        ChoiceIntent::Restart => {
            slot.restart();
            selected.set(0);
        }
    });

    let screen = map_choice_screen(&slot.quiz.read(), &resolver);
    let load_error = slot.load_error.read().clone();

    rsx! {
        div { class: "page quiz-page",
            h2 { "Quiz App" }
            BankPicker {
                label: "Upload questions JSON",
                on_load: move |path| dispatch.call(ChoiceIntent::Load(path)),
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
                        on_restart: move |()| dispatch.call(ChoiceIntent::Restart),
                    }
                },
                QuizScreen::Question(vm) => rsx! {
                    ChoiceQuestionPanel { vm, selected: selected(), dispatch }
                },
            }
        }
    }
}

#[component]
fn ChoiceQuestionPanel(vm: ChoiceQuestionVm, selected: usize, dispatch: Callback<ChoiceIntent>) -> Element {
    let chrome = vm.chrome;
    let group = format!("choice-{}", chrome.question_key);
    let locked = !chrome.can_submit;

    rsx! {
        section { class: "question",
            h3 { class: "question__heading", "{chrome.heading}" }
            div { class: "question__text", dangerous_inner_html: "{chrome.text_html}" }
            if let Some(image) = vm.image {
                QuestionImage { image }
            }
            if let Some(sound) = vm.sound {
                SoundPlayer { key: "{chrome.question_key}", sound }
            }
            fieldset { class: "question__options", disabled: locked,
                for (index, option) in vm.options.into_iter().enumerate() {
                    label { key: "{index}", class: "option",
                        input {
                            r#type: "radio",
                            name: "{group}",
                            value: "{index}",
                            checked: index == selected,
                            onchange: move |_| dispatch.call(ChoiceIntent::Select(index)),
                        }
                        span { class: "option__label", "{option}" }
                    }
                }
            }
            QuestionFooter {
                chrome: chrome.clone(),
                on_submit: move |()| dispatch.call(ChoiceIntent::Submit),
                on_advance: move |()| dispatch.call(ChoiceIntent::Advance),
            }
        }
    }
}
