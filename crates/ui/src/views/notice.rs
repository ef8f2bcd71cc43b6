use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn for_verdict(is_correct: bool) -> Self {
        if is_correct { Self::Success } else { Self::Error }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Success => "notice notice--success",
            Self::Warning => "notice notice--warning",
            Self::Error => "notice notice--error",
        }
    }
}

#[component]
pub fn Notice(kind: NoticeKind, message: String) -> Element {
    rsx! {
        p { class: "{kind.class()}", role: "status", "{message}" }
    }
}
