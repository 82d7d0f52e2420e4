#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controls whether an [`ErrorCollection`](crate::ErrorCollection) discards
/// errors that match one it already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicatePolicy {
    /// Every error is appended.
    #[default]
    AllowDuplicates,
    /// Structured errors with equal code, domain, label and message are
    /// duplicates regardless of when they were created.
    RejectDuplicatesIgnoringTimestamp,
    /// Structured errors are duplicates only if their creation times match too.
    RejectDuplicatesStrict,
}

impl DuplicatePolicy {
    /// Returns true if this policy scans for duplicates at all.
    #[inline]
    pub fn rejects_duplicates(self) -> bool {
        !matches!(self, Self::AllowDuplicates)
    }

    /// Returns true if creation timestamps take part in the comparison.
    #[inline]
    pub fn compares_timestamps(self) -> bool {
        matches!(self, Self::RejectDuplicatesStrict)
    }
}
