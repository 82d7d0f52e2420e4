use crate::types::{CollectedError, DuplicatePolicy};

/// Returns true if `candidate` duplicates `existing` under `policy`.
///
/// Structured errors compare code, domain, label and message, plus the
/// creation time under [`DuplicatePolicy::RejectDuplicatesStrict`]. Any pair
/// involving an opaque entry falls back to structural equality.
pub(crate) fn is_duplicate(
    policy: DuplicatePolicy,
    existing: &CollectedError,
    candidate: &CollectedError,
) -> bool {
    match (existing, candidate) {
        (CollectedError::Structured(a), CollectedError::Structured(b)) => {
            a.same_fields(b) && (!policy.compares_timestamps() || a.created_at == b.created_at)
        }
        (CollectedError::Opaque(a), CollectedError::Opaque(b)) => a == b,
        (CollectedError::Structured(_), CollectedError::Opaque(_))
        | (CollectedError::Opaque(_), CollectedError::Structured(_)) => false,
    }
}

/// Scans `entries` and stops at the first duplicate of `candidate`.
pub(crate) fn find_duplicate(
    policy: DuplicatePolicy,
    entries: &[CollectedError],
    candidate: &CollectedError,
) -> Option<usize> {
    if !policy.rejects_duplicates() {
        return None;
    }
    entries.iter().position(|existing| is_duplicate(policy, existing, candidate))
}
