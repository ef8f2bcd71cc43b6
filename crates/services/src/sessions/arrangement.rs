use quiz_core::model::OrderingQuestion;

/// The order a user is building for an ordering question before submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArrangement {
    keys: Vec<String>,
}

impl ItemArrangement {
    /// Start from the items in their as-loaded order.
    #[must_use]
    pub fn for_question(question: &OrderingQuestion) -> Self {
        Self {
            keys: question.initial_keys(),
        }
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }

    /// Whether this is a permutation of `question`'s items.
    #[must_use]
    pub fn fits(&self, question: &OrderingQuestion) -> bool {
        self.keys.len() == question.items().len()
            && self.keys.iter().all(|key| question.item(key).is_some())
    }

    /// Move the item at `from` so it ends up at `to`. Out-of-range moves are ignored.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if from >= self.keys.len() || to >= self.keys.len() || from == to {
            return;
        }
        let key = self.keys.remove(from);
        self.keys.insert(to, key);
    }

    pub fn move_left(&mut self, index: usize) {
        if let Some(to) = index.checked_sub(1) {
            self.move_item(index, to);
        }
    }

    pub fn move_right(&mut self, index: usize) {
        self.move_item(index, index + 1);
    }
}
