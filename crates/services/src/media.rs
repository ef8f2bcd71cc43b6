//! Turns raw question media fields into something a view can render.

use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quiz_core::model::MediaField;
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::error::MediaError;
use crate::settings::DEFAULT_MEDIA_VOLUME;

const AUDIO_EXTENSIONS: [&str; 4] = [".mp3", ".wav", ".ogg", ".m4a"];
const RAW_AUDIO_MIME: &str = "audio/mpeg";
const DEFAULT_IMAGE_MIME: &str = "image/png";

//
// ─── MEDIA REFERENCES ──────────────────────────────────────────────────────────
//

/// The forms a media field may take in a question file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRef {
    Url(Url),
    Path(PathBuf),
    /// `data:<mime>;base64,<payload>`, kept undecoded.
    DataUrl(String),
    Structured {
        source: Box<MediaRef>,
        caption: Option<String>,
    },
    RawBytes(Vec<u8>),
}

impl MediaRef {
    /// Classify a raw JSON value. Returns `None` for null and for shapes no
    /// renderer understands (numbers, booleans, objects without a source).
    #[must_use]
    pub fn from_raw(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(s) => Some(Self::from_str_ref(s)),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(Self::RawBytes),
            Value::Object(map) => {
                let caption = map
                    .get("caption")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                let source = ["url", "data", "base64"].iter().find_map(|key| {
                    let value = map.get(*key)?.as_str().filter(|s| !s.is_empty())?;
                    Some(if *key == "base64" && !value.starts_with("data:") {
                        Self::DataUrl(format!("data:;base64,{value}"))
                    } else {
                        Self::from_str_ref(value)
                    })
                })?;
                Some(Self::Structured {
                    source: Box::new(source),
                    caption,
                })
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => None,
        }
    }

    fn from_str_ref(s: &str) -> Self {
        if s.starts_with("data:") {
            return Self::DataUrl(s.to_string());
        }
        match Url::parse(s) {
            // Single-letter schemes are Windows drive letters, not URLs.
            Ok(url) if url.scheme().len() > 1 => Self::Url(url),
            _ => Self::Path(PathBuf::from(s)),
        }
    }
}

/// Split a data URL into its mime type and decoded payload.
fn decode_data_url(data_url: &str) -> Option<(String, Vec<u8>)> {
    let rest = data_url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.split(';').next().unwrap_or_default().to_string();
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(cleaned).ok()?;
    Some((mime, bytes))
}

fn bytes_to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

//
// ─── RESOLVED MEDIA ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(Url),
    Path(PathBuf),
    Bytes { mime: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub source: ImageSource,
    pub caption: Option<String>,
}

impl ResolvedImage {
    /// Value for an `<img src>` attribute.
    #[must_use]
    pub fn src(&self) -> String {
        match &self.source {
            ImageSource::Url(url) => url.to_string(),
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes { mime, bytes } => bytes_to_data_url(mime, bytes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSound {
    AudioUrl(Url),
    AudioBytes { mime: String, bytes: Vec<u8> },
    YouTube(Url),
    Video(Url),
}

impl ResolvedSound {
    /// Value for the `src` attribute of the player element.
    #[must_use]
    pub fn src(&self) -> String {
        match self {
            ResolvedSound::AudioUrl(url) | ResolvedSound::YouTube(url) | ResolvedSound::Video(url) => {
                url.to_string()
            }
            ResolvedSound::AudioBytes { mime, bytes } => bytes_to_data_url(mime, bytes),
        }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, ResolvedSound::YouTube(_) | ResolvedSound::Video(_))
    }
}

/// A sound ready to play, with the volume the player should start at.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    pub sound: ResolvedSound,
    pub volume: f32,
}

//
// ─── RESOLVER ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaResolver {
    volume: f32,
}

impl Default for MediaResolver {
    fn default() -> Self {
        Self {
            volume: DEFAULT_MEDIA_VOLUME,
        }
    }
}

impl MediaResolver {
    #[must_use]
    pub fn new(volume: f32) -> Self {
        Self { volume }
    }

    /// Resolve an image field. `Ok(None)` means there is nothing to show.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::ImageDataUrl` for an undecodable data URL and
    /// `MediaError::UnsupportedImage` for values no renderer can display.
    pub fn resolve_image(&self, field: &MediaField) -> Result<Option<ResolvedImage>, MediaError> {
        let raw = field.raw();
        // An object without url/data/base64 carries nothing to show.
        if raw.is_null() || (raw.is_object() && MediaRef::from_raw(raw).is_none()) {
            return Ok(None);
        }
        let media = MediaRef::from_raw(raw).ok_or(MediaError::UnsupportedImage);
        let image = media.and_then(|media| Self::image_from_ref(media, None));
        if let Err(err) = &image {
            warn!(key = field.key(), error = %err, "image could not be resolved");
        }
        image.map(Some)
    }

    fn image_from_ref(media: MediaRef, caption: Option<String>) -> Result<ResolvedImage, MediaError> {
        let source = match media {
            MediaRef::Url(url) => ImageSource::Url(url),
            MediaRef::Path(path) => ImageSource::Path(path),
            MediaRef::DataUrl(data_url) => {
                let (mime, bytes) = decode_data_url(&data_url).ok_or(MediaError::ImageDataUrl)?;
                let mime = if mime.is_empty() {
                    DEFAULT_IMAGE_MIME.to_string()
                } else {
                    mime
                };
                ImageSource::Bytes { mime, bytes }
            }
            MediaRef::RawBytes(bytes) => ImageSource::Bytes {
                mime: DEFAULT_IMAGE_MIME.to_string(),
                bytes,
            },
            MediaRef::Structured { source, caption } => {
                return Self::image_from_ref(*source, caption);
            }
        };
        Ok(ResolvedImage { source, caption })
    }

    /// Resolve a playsound field into something playable.
    ///
    /// # Errors
    ///
    /// Returns a `MediaError` describing why the content cannot be played.
    pub fn resolve_sound(&self, field: &MediaField) -> Result<Playback, MediaError> {
        let sound = Self::sound_from_raw(field.raw());
        if let Err(err) = &sound {
            warn!(key = field.key(), error = %err, "sound could not be resolved");
        }
        sound.map(|sound| Playback {
            sound,
            volume: self.volume,
        })
    }

    fn sound_from_raw(raw: &Value) -> Result<ResolvedSound, MediaError> {
        match MediaRef::from_raw(raw) {
            Some(MediaRef::DataUrl(data_url)) => {
                if !data_url.starts_with("data:audio") {
                    return Err(MediaError::UnsupportedSoundFormat);
                }
                let (mime, bytes) =
                    decode_data_url(&data_url).ok_or_else(|| MediaError::SoundDecode {
                        reason: "invalid base64 audio payload".to_string(),
                    })?;
                Ok(ResolvedSound::AudioBytes { mime, bytes })
            }
            Some(MediaRef::Url(url)) if url.scheme().starts_with("http") => {
                Ok(Self::classify_http(url))
            }
            Some(MediaRef::Url(_) | MediaRef::Path(_)) => Err(MediaError::UnsupportedSoundFormat),
            Some(MediaRef::RawBytes(bytes)) => Ok(ResolvedSound::AudioBytes {
                mime: RAW_AUDIO_MIME.to_string(),
                bytes,
            }),
            Some(MediaRef::Structured { .. }) | None => Err(MediaError::UnplayableSound),
        }
    }

    fn classify_http(url: Url) -> ResolvedSound {
        let is_youtube = url
            .host_str()
            .is_some_and(|host| host.ends_with("youtube.com") || host == "youtu.be");
        if is_youtube {
            return ResolvedSound::YouTube(url);
        }
        let path = url.path().to_ascii_lowercase();
        if AUDIO_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            ResolvedSound::AudioUrl(url)
        } else {
            ResolvedSound::Video(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::MediaSlot;
    use serde_json::json;

    fn image(raw: Value) -> MediaField {
        MediaField::new("image", MediaSlot::Image, raw)
    }

    fn sound(raw: Value) -> MediaField {
        MediaField::new("playsound", MediaSlot::Sound, raw)
    }

    #[test]
    fn classifies_reference_forms() {
        assert!(matches!(
            MediaRef::from_raw(&json!("https://example.com/cat.png")),
            Some(MediaRef::Url(_))
        ));
        assert!(matches!(
            MediaRef::from_raw(&json!("assets/cat.png")),
            Some(MediaRef::Path(_))
        ));
        assert!(matches!(
            MediaRef::from_raw(&json!("C:\\images\\cat.png")),
            Some(MediaRef::Path(_))
        ));
        assert!(matches!(
            MediaRef::from_raw(&json!("data:image/png;base64,AAAA")),
            Some(MediaRef::DataUrl(_))
        ));
        assert_eq!(
            MediaRef::from_raw(&json!([1, 2, 255])),
            Some(MediaRef::RawBytes(vec![1, 2, 255]))
        );
        assert_eq!(MediaRef::from_raw(&json!([1, 256])), None);
        assert_eq!(MediaRef::from_raw(&json!(42)), None);
        assert_eq!(MediaRef::from_raw(&json!({ "caption": "only" })), None);
    }

    #[test]
    fn data_url_image_is_decoded() {
        let resolved = MediaResolver::default()
            .resolve_image(&image(json!("data:image/gif;base64,aGVsbG8=")))
            .unwrap()
            .unwrap();
        assert_eq!(
            resolved.source,
            ImageSource::Bytes {
                mime: "image/gif".into(),
                bytes: b"hello".to_vec()
            }
        );
        assert_eq!(resolved.src(), "data:image/gif;base64,aGVsbG8=");
    }

    #[test]
    fn broken_data_url_is_a_warning() {
        let resolver = MediaResolver::default();
        assert_eq!(
            resolver.resolve_image(&image(json!("data:image/png;base64,@@@@"))),
            Err(MediaError::ImageDataUrl)
        );
        assert_eq!(
            resolver.resolve_image(&image(json!("data:image/png;base64"))),
            Err(MediaError::ImageDataUrl)
        );
    }

    #[test]
    fn structured_image_keeps_caption() {
        let resolved = MediaResolver::default()
            .resolve_image(&image(json!({
                "url": "https://example.com/a.jpg",
                "caption": "A cat"
            })))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.caption.as_deref(), Some("A cat"));
        assert_eq!(resolved.src(), "https://example.com/a.jpg");
    }

    #[test]
    fn bare_base64_in_structured_image_decodes() {
        let resolved = MediaResolver::default()
            .resolve_image(&image(json!({ "base64": "aGVsbG8=" })))
            .unwrap()
            .unwrap();
        assert!(matches!(resolved.source, ImageSource::Bytes { ref mime, .. } if mime == "image/png"));
    }

    #[test]
    fn null_image_is_nothing_and_numbers_are_unsupported() {
        let resolver = MediaResolver::default();
        assert_eq!(resolver.resolve_image(&image(Value::Null)), Ok(None));
        assert_eq!(
            resolver.resolve_image(&image(json!(7))),
            Err(MediaError::UnsupportedImage)
        );
    }

    #[test]
    fn image_object_without_source_shows_nothing() {
        let resolver = MediaResolver::default();
        assert_eq!(
            resolver.resolve_image(&image(json!({ "caption": "No picture" }))),
            Ok(None)
        );
        assert_eq!(
            resolver.resolve_image(&image(json!({ "url": "", "caption": "Empty" }))),
            Ok(None)
        );
    }

    #[test]
    fn sound_urls_are_classified() {
        let resolver = MediaResolver::new(0.5);
        let youtube = resolver
            .resolve_sound(&sound(json!("https://www.youtube.com/watch?v=abc")))
            .unwrap();
        assert!(matches!(youtube.sound, ResolvedSound::YouTube(_)));
        assert!((youtube.volume - 0.5).abs() < f32::EPSILON);

        let short = resolver
            .resolve_sound(&sound(json!("https://youtu.be/abc")))
            .unwrap();
        assert!(matches!(short.sound, ResolvedSound::YouTube(_)));

        let audio = resolver
            .resolve_sound(&sound(json!("https://example.com/song.MP3?x=1")))
            .unwrap();
        assert!(matches!(audio.sound, ResolvedSound::AudioUrl(_)));
        assert!(!audio.sound.is_video());

        let video = resolver
            .resolve_sound(&sound(json!("https://example.com/clip.mp4")))
            .unwrap();
        assert!(matches!(video.sound, ResolvedSound::Video(_)));
    }

    #[test]
    fn sound_data_urls_and_bytes() {
        let resolver = MediaResolver::default();
        let inline = resolver
            .resolve_sound(&sound(json!("data:audio/wav;base64,aGVsbG8=")))
            .unwrap();
        assert_eq!(
            inline.sound,
            ResolvedSound::AudioBytes {
                mime: "audio/wav".into(),
                bytes: b"hello".to_vec()
            }
        );

        let raw = resolver.resolve_sound(&sound(json!([104, 105]))).unwrap();
        assert_eq!(raw.sound.src(), "data:audio/mpeg;base64,aGk=");
    }

    #[test]
    fn unplayable_sounds_are_warnings() {
        let resolver = MediaResolver::default();
        assert_eq!(
            resolver.resolve_sound(&sound(json!("sounds/local.mp3"))),
            Err(MediaError::UnsupportedSoundFormat)
        );
        assert_eq!(
            resolver.resolve_sound(&sound(json!("data:image/png;base64,AAAA"))),
            Err(MediaError::UnsupportedSoundFormat)
        );
        assert_eq!(
            resolver.resolve_sound(&sound(json!({ "url": "https://example.com/a.mp3" }))),
            Err(MediaError::UnplayableSound)
        );
        assert!(matches!(
            resolver.resolve_sound(&sound(json!("data:audio/mp3;base64,%%%"))),
            Err(MediaError::SoundDecode { .. })
        ));
    }
}
