use serde_json::{Map, Value};

/// Keys checked, in order, for a question image. The first key present wins.
pub const IMAGE_KEYS: [&str; 6] = [
    "image",
    "image_url",
    "img",
    "image_data",
    "image_base64",
    "image_b64",
];

/// Keys checked, in order, for a question sound. The first non-empty value wins.
pub const SOUND_KEYS: [&str; 2] = ["playsound", "play_sound"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Image,
    Sound,
}

/// A media field copied verbatim from a question record.
///
/// The core never looks inside `raw`; resolving it into something renderable
/// belongs to the presentation boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaField {
    key: String,
    slot: MediaSlot,
    raw: Value,
}

impl MediaField {
    #[must_use]
    pub fn new(key: impl Into<String>, slot: MediaSlot, raw: Value) -> Self {
        Self {
            key: key.into(),
            slot,
            raw,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn slot(&self) -> MediaSlot {
        self.slot
    }

    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

pub(crate) fn pick_image(record: &Map<String, Value>) -> Option<MediaField> {
    IMAGE_KEYS.iter().find_map(|key| {
        record
            .get(*key)
            .map(|raw| MediaField::new(*key, MediaSlot::Image, raw.clone()))
    })
}

pub(crate) fn pick_sound(record: &Map<String, Value>) -> Option<MediaField> {
    SOUND_KEYS.iter().find_map(|key| {
        record
            .get(*key)
            .filter(|raw| is_present(raw))
            .map(|raw| MediaField::new(*key, MediaSlot::Sound, raw.clone()))
    })
}

fn is_present(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
