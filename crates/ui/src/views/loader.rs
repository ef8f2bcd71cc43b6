use dioxus::prelude::*;

use super::notice::{Notice, NoticeKind};

/// Path field plus a Load button; the page decides what loading means.
#[component]
pub fn BankPicker(label: &'static str, on_load: EventHandler<String>, error: Option<String>) -> Element {
    let mut path = use_signal(String::new);
    let is_blank = path.read().trim().is_empty();

    rsx! {
        div { class: "bank-picker",
            label { class: "bank-picker__label", r#for: "bank-path", "{label}" }
            div { class: "bank-picker__row",
                input {
                    id: "bank-path",
                    r#type: "text",
                    placeholder: "path/to/questions.json",
                    value: "{path}",
                    oninput: move |evt: FormEvent| path.set(evt.value()),
                }
                button {
                    class: "btn",
                    id: "bank-load",
                    r#type: "button",
                    disabled: is_blank,
                    onclick: move |_| on_load.call(path.read().trim().to_string()),
                    "Load"
                }
            }
            if let Some(message) = error {
                Notice { kind: NoticeKind::Error, message }
            }
        }
    }
}
