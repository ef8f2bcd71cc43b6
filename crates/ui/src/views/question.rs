use dioxus::prelude::*;

use crate::vm::{CompletionVm, QuestionChrome};

use super::notice::{Notice, NoticeKind};

/// Verdict, Submit / Next / Finish and the running score under a question.
#[component]
pub fn QuestionFooter(
    chrome: QuestionChrome,
    on_submit: EventHandler<()>,
    on_advance: EventHandler<()>,
) -> Element {
    rsx! {
        if let Some(feedback) = chrome.feedback {
            Notice { kind: NoticeKind::for_verdict(feedback.is_correct), message: feedback.message }
        }
        div { class: "question__actions",
            if chrome.can_submit {
                button {
                    class: "btn",
                    id: "quiz-submit",
                    r#type: "button",
                    onclick: move |_| on_submit.call(()),
                    "Submit"
                }
            }
            if chrome.can_advance {
                button {
                    class: "btn",
                    id: "quiz-advance",
                    r#type: "button",
                    onclick: move |_| on_advance.call(()),
                    "{chrome.advance_label}"
                }
            }
            span { class: "question__score", "{chrome.score_label}" }
        }
    }
}

#[component]
pub fn CompletionPanel(completion: CompletionVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        section { class: "quiz-complete",
            if let Some(feedback) = completion.feedback {
                Notice { kind: NoticeKind::for_verdict(feedback.is_correct), message: feedback.message }
            }
            Notice { kind: NoticeKind::Info, message: completion.message }
            button {
                class: "btn",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Restart"
            }
        }
    }
}
