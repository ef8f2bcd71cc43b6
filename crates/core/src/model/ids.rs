use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic identifier of a loaded question bank.
///
/// Every successful load gets a fresh generation, so the session can tell a new
/// upload apart from a re-render of the bank it already has. The default, zero,
/// marks a bank that has not been stamped by a loader yet.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BankGeneration(u64);

impl BankGeneration {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for BankGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BankGeneration({})", self.0)
    }
}

impl fmt::Display for BankGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
