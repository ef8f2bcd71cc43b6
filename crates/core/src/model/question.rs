use serde_json::{Map, Value};

use crate::model::media::{MediaField, pick_image, pick_sound};

/// Correct-answer text shown when a record's answer index cannot be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

/// Behaviour shared by every question variant a bank can hold.
pub trait QuizQuestion: Clone + Send + Sync + 'static {
    /// Build a question from one JSON record.
    ///
    /// Missing or mistyped fields fall back to empty values; this never fails.
    fn from_record(record: &Map<String, Value>) -> Self;

    fn text(&self) -> &str;

    /// True when the record cannot be answered correctly as written.
    fn is_malformed(&self) -> bool;
}

//
// ─── MULTIPLE CHOICE ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceQuestion {
    text: String,
    options: Vec<String>,
    answer: Option<i64>,
    image: Option<MediaField>,
    sound: Option<MediaField>,
}

impl ChoiceQuestion {
    /// `answer` is 1-based, as written in question files.
    #[must_use]
    pub fn new(text: impl Into<String>, options: Vec<String>, answer: Option<i64>) -> Self {
        Self {
            text: text.into(),
            options,
            answer,
            image: None,
            sound: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: MediaField) -> Self {
        self.image = Some(image);
        self
    }

    #[must_use]
    pub fn with_sound(mut self, sound: MediaField) -> Self {
        self.sound = Some(sound);
        self
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> Option<i64> {
        self.answer
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaField> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn sound(&self) -> Option<&MediaField> {
        self.sound.as_ref()
    }

    /// Zero-based index of the correct option, if the answer points inside `options`.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        let zero_based = self.answer?.checked_sub(1)?;
        let index = usize::try_from(zero_based).ok()?;
        (index < self.options.len()).then_some(index)
    }

    /// Text of the correct option, or [`NOT_AVAILABLE`].
    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.correct_index()
            .map_or(NOT_AVAILABLE, |index| self.options[index].as_str())
    }

    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_index()
            .is_some_and(|index| self.options[index] == selected)
    }
}

impl QuizQuestion for ChoiceQuestion {
    fn from_record(record: &Map<String, Value>) -> Self {
        let options = record
            .get("options")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(value_to_label).collect())
            .unwrap_or_default();

        // An absent answer means "first option"; a present but unusable one is unanswerable.
        let answer = match record.get("answer") {
            None => Some(1),
            Some(raw) => parse_answer(raw),
        };

        Self {
            text: string_field(record, "question"),
            options,
            answer,
            image: pick_image(record),
            sound: pick_sound(record),
        }
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn is_malformed(&self) -> bool {
        self.correct_index().is_none()
    }
}

//
// ─── ORDERING ──────────────────────────────────────────────────────────────────
//

/// One draggable item of an ordering question.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingItem {
    key: String,
    label: String,
    image: Option<MediaField>,
}

impl OrderingItem {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: MediaField) -> Self {
        self.image = Some(image);
        self
    }

    /// Position-derived key: `"1"` for the first item, `"2"` for the second, ...
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn image(&self) -> Option<&MediaField> {
        self.image.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderingQuestion {
    text: String,
    items: Vec<OrderingItem>,
    correct_order: Vec<String>,
}

impl OrderingQuestion {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        items: Vec<OrderingItem>,
        correct_order: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            items,
            correct_order,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[OrderingItem] {
        &self.items
    }

    #[must_use]
    pub fn correct_order(&self) -> &[String] {
        &self.correct_order
    }

    /// Item keys in their initial, as-loaded order.
    #[must_use]
    pub fn initial_keys(&self) -> Vec<String> {
        self.items.iter().map(|item| item.key.clone()).collect()
    }

    #[must_use]
    pub fn item(&self, key: &str) -> Option<&OrderingItem> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Exact sequence equality; the same keys in another order are wrong.
    #[must_use]
    pub fn is_correct<S: AsRef<str>>(&self, proposed: &[S]) -> bool {
        proposed.len() == self.correct_order.len()
            && proposed
                .iter()
                .zip(&self.correct_order)
                .all(|(left, right)| left.as_ref() == right)
    }
}

impl QuizQuestion for OrderingQuestion {
    fn from_record(record: &Map<String, Value>) -> Self {
        let items = record
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .map(|(index, raw)| {
                        let key = (index + 1).to_string();
                        let Some(item) = raw.as_object() else {
                            return OrderingItem::new(key.clone(), key);
                        };
                        let label = item
                            .get("label")
                            .and_then(Value::as_str)
                            .map_or_else(|| key.clone(), str::to_string);
                        OrderingItem {
                            key,
                            label,
                            image: pick_image(item),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let correct_order = record
            .get("correct_order")
            .and_then(Value::as_array)
            .map(|keys| keys.iter().map(value_to_label).collect())
            .unwrap_or_default();

        Self {
            text: string_field(record, "question"),
            items,
            correct_order,
        }
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn is_malformed(&self) -> bool {
        self.items.is_empty()
            || self.correct_order.len() != self.items.len()
            || self
                .correct_order
                .iter()
                .any(|key| self.item(key).is_none())
    }
}

//
// ─── RECORD HELPERS ────────────────────────────────────────────────────────────
//

fn string_field(record: &Map<String, Value>, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(value) => value_to_label(value),
    }
}

fn value_to_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn parse_answer(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(flag) => Some(i64::from(*flag)),
        _ => None,
    }
}
