use dioxus::document::eval;
use dioxus::prelude::*;

use crate::vm::{ImageVm, PLAYER_ID, PlayerKind, SoundVm, volume_script};

use super::notice::{Notice, NoticeKind};

#[component]
pub fn QuestionImage(image: ImageVm, width: Option<u32>) -> Element {
    let width = width.map(|width| width.to_string()).unwrap_or_default();
    match image {
        ImageVm::Shown { src, caption } => rsx! {
            figure { class: "question-image",
                img {
                    src: "{src}",
                    alt: caption.clone().unwrap_or_default(),
                    width: "{width}",
                }
                if let Some(ref caption) = caption {
                    figcaption { "{caption}" }
                }
            }
        },
        ImageVm::Warning(message) => rsx! {
            Notice { kind: NoticeKind::Warning, message }
        },
    }
}

/// Play button that reveals the player. Key it by question so it resets between questions.
#[component]
pub fn SoundPlayer(sound: SoundVm) -> Element {
    let mut playing = use_signal(|| false);
    let script = match &sound {
        SoundVm::Player { kind, volume, .. } => Some(volume_script(*kind, *volume)),
        SoundVm::Warning(_) => None,
    };

    use_effect(move || {
        if !playing() {
            return;
        }
        if let Some(js) = script.as_deref() {
            let _ = eval(js);
        }
    });

    rsx! {
        div { class: "sound-player",
            button {
                class: "btn btn-secondary",
                id: "play-sound",
                r#type: "button",
                onclick: move |_| playing.set(true),
                "▶️ Play"
            }
            if playing() {
                match sound {
                    SoundVm::Player { kind: PlayerKind::Audio, src, .. } => rsx! {
                        audio { id: PLAYER_ID, src: "{src}", controls: true, autoplay: true }
                    },
                    SoundVm::Player { kind: PlayerKind::Video, src, .. } => rsx! {
                        video { id: PLAYER_ID, src: "{src}", controls: true, autoplay: true, width: "480" }
                    },
                    SoundVm::Player { kind: PlayerKind::YouTube, src, .. } => rsx! {
                        iframe { id: PLAYER_ID, src: "{src}", width: "480", height: "270" }
                    },
                    SoundVm::Warning(message) => rsx! {
                        Notice { kind: NoticeKind::Warning, message }
                    },
                }
            }
        }
    }
}
