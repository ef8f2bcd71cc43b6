use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use quiz_core::model::{BankGeneration, QuestionBank, QuizQuestion};
use tracing::{debug, warn};

use crate::error::LoadError;

/// Source of bank generations, shared by every loader in the process.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> BankGeneration {
    BankGeneration::new(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
}

/// Parses question documents into banks, stamping each with a fresh generation.
///
/// Generations are unique across the process and only handed out on success,
/// so a rejected upload never looks like a new bank to the session.
#[derive(Debug, Clone, Default)]
pub struct BankLoader {
    last: Option<BankGeneration>,
}

impl BankLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation handed out by the most recent successful load.
    #[must_use]
    pub fn last_generation(&self) -> Option<BankGeneration> {
        self.last
    }

    /// # Errors
    ///
    /// Returns `LoadError::Parse` for invalid JSON and `LoadError::InvalidFormat`
    /// when the document is not a list of question objects.
    pub fn load_str<Q: QuizQuestion>(&mut self, text: &str) -> Result<QuestionBank<Q>, LoadError> {
        let document: serde_json::Value = serde_json::from_str(text)?;
        self.load_value(&document)
    }

    /// # Errors
    ///
    /// See [`BankLoader::load_str`].
    pub fn load_bytes<Q: QuizQuestion>(
        &mut self,
        bytes: &[u8],
    ) -> Result<QuestionBank<Q>, LoadError> {
        let document: serde_json::Value = serde_json::from_slice(bytes)?;
        self.load_value(&document)
    }

    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read, otherwise see
    /// [`BankLoader::load_str`].
    pub fn load_path<Q: QuizQuestion>(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<QuestionBank<Q>, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read questions file");
        self.load_bytes(&bytes)
    }

    /// # Errors
    ///
    /// Returns `LoadError::InvalidFormat` when the document is not a list of objects.
    pub fn load_value<Q: QuizQuestion>(
        &mut self,
        document: &serde_json::Value,
    ) -> Result<QuestionBank<Q>, LoadError> {
        let unstamped = QuestionBank::from_value(BankGeneration::default(), document)
            .inspect_err(|err| {
                warn!(error = ?err, "rejected question document");
            })?;
        let generation = next_generation();
        let bank = unstamped.with_generation(generation);

        for index in bank.malformed_indices() {
            warn!(index, %generation, "question cannot be answered correctly as written");
        }

        self.last = Some(generation);
        Ok(bank)
    }
}
