use quiz_core::model::MediaField;
use services::{MediaResolver, ResolvedSound};
use url::Url;

/// DOM id of the single sound/video player on a question page.
pub const PLAYER_ID: &str = "quiz-player";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageVm {
    Shown { src: String, caption: Option<String> },
    Warning(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Audio,
    Video,
    YouTube,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SoundVm {
    Player {
        kind: PlayerKind,
        src: String,
        volume: f32,
    },
    Warning(String),
}

#[must_use]
pub fn map_image(resolver: &MediaResolver, field: Option<&MediaField>) -> Option<ImageVm> {
    match resolver.resolve_image(field?) {
        Ok(Some(image)) => Some(ImageVm::Shown {
            src: image.src(),
            caption: image.caption,
        }),
        Ok(None) => None,
        Err(err) => Some(ImageVm::Warning(err.to_string())),
    }
}

#[must_use]
pub fn map_sound(resolver: &MediaResolver, field: Option<&MediaField>) -> Option<SoundVm> {
    let playback = match resolver.resolve_sound(field?) {
        Ok(playback) => playback,
        Err(err) => return Some(SoundVm::Warning(err.to_string())),
    };
    let (kind, src) = match &playback.sound {
        ResolvedSound::YouTube(url) => (PlayerKind::YouTube, youtube_embed_src(url)),
        sound if sound.is_video() => (PlayerKind::Video, sound.src()),
        sound => (PlayerKind::Audio, sound.src()),
    };
    Some(SoundVm::Player {
        kind,
        src,
        volume: playback.volume,
    })
}

fn youtube_video_id(url: &Url) -> Option<String> {
    if url.host_str() == Some("youtu.be") {
        return url
            .path_segments()?
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string);
    }
    if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "v") {
        return Some(id.into_owned()).filter(|id| !id.is_empty());
    }
    // /embed/<id> and /shorts/<id>
    let mut segments = url.path_segments()?;
    match segments.next() {
        Some("embed" | "shorts") => segments
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

/// Embeddable player URL for a YouTube link, with the JS API enabled for volume control.
#[must_use]
pub fn youtube_embed_src(url: &Url) -> String {
    youtube_video_id(url).map_or_else(
        || url.to_string(),
        |id| format!("https://www.youtube.com/embed/{id}?enablejsapi=1"),
    )
}

/// Script that sets the starting volume of the player once it is in the DOM.
#[must_use]
pub fn volume_script(kind: PlayerKind, volume: f32) -> String {
    let volume = volume.clamp(0.0, 1.0);
    match kind {
        PlayerKind::Audio | PlayerKind::Video => format!(
            "setTimeout(function() {{ \
                const player = document.getElementById({PLAYER_ID:?}); \
                if (player) {{ player.volume = {volume}; }} \
            }}, 0);"
        ),
        PlayerKind::YouTube => {
            // The iframe API takes 0-100.
            let percent = (volume * 100.0).round();
            format!(
                "setTimeout(function() {{ \
                    const frame = document.getElementById({PLAYER_ID:?}); \
                    if (frame && frame.contentWindow) {{ \
                        frame.contentWindow.postMessage(JSON.stringify({{ \
                            event: 'command', func: 'setVolume', args: [{percent}] \
                        }}), '*'); \
                    }} \
                }}, 1000);"
            )
        }
    }
}
