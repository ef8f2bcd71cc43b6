use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::model::ids::BankGeneration;
use crate::model::question::QuizQuestion;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    /// The document is not a list of question objects.
    #[error(
        "JSON must be a list of question objects (each with 'question', 'options', 'answer')."
    )]
    InvalidFormat { detail: FormatIssue },
}

/// What exactly was wrong with the shape of a rejected document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    NotAList,
    RecordNotObject { index: usize },
}

/// Immutable list of questions loaded from one document.
///
/// Cloning is cheap; clones share the same question storage and generation.
#[derive(Debug, Clone)]
pub struct QuestionBank<Q> {
    generation: BankGeneration,
    questions: Arc<[Q]>,
}

impl<Q: QuizQuestion> QuestionBank<Q> {
    #[must_use]
    pub fn new(generation: BankGeneration, questions: Vec<Q>) -> Self {
        Self {
            generation,
            questions: questions.into(),
        }
    }

    /// Build a bank from an already-parsed JSON document.
    ///
    /// Only the outer shape is checked: a top-level array whose entries are
    /// objects. Field contents are read leniently by [`QuizQuestion::from_record`].
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidFormat` when the document is not an array of objects.
    pub fn from_value(generation: BankGeneration, document: &Value) -> Result<Self, BankError> {
        let records = document.as_array().ok_or(BankError::InvalidFormat {
            detail: FormatIssue::NotAList,
        })?;

        let questions = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .as_object()
                    .map(Q::from_record)
                    .ok_or(BankError::InvalidFormat {
                        detail: FormatIssue::RecordNotObject { index },
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(generation, questions))
    }

    /// The same questions under a different generation.
    #[must_use]
    pub fn with_generation(self, generation: BankGeneration) -> Self {
        Self { generation, ..self }
    }

    #[must_use]
    pub fn generation(&self) -> BankGeneration {
        self.generation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Q> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Q] {
        &self.questions
    }

    /// Indices of records that cannot be answered correctly as written.
    #[must_use]
    pub fn malformed_indices(&self) -> Vec<usize> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, question)| question.is_malformed())
            .map(|(index, _)| index)
            .collect()
    }
}
