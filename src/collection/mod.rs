//! Thread-safe accumulation of multiple errors into one.
//!
//! [`ErrorCollection`] gathers [`StructuredError`](crate::StructuredError)s
//! and arbitrary errors behind a single readers-writer lock:
//! - Appends take the write lock for their full duration, including the
//!   duplicate scan, so scan-then-append is atomic
//! - [`ErrorCollection::error`] takes the read lock and may run concurrently
//!   with other reads
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use jsonerror::{DuplicatePolicy, ErrorCollection, StructuredError};
//!
//! let policy = DuplicatePolicy::RejectDuplicatesIgnoringTimestamp;
//! let errors = Arc::new(ErrorCollection::with_policy(policy));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let errors = Arc::clone(&errors);
//!         thread::spawn(move || errors.add_error(StructuredError::new(5, "x", "y")))
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(errors.len(), 1);
//! ```

use core::fmt::{self, Display};
use std::error::Error;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::traits::IntoCollectedError;
use crate::types::{
    default_formatter, CollectedError, DuplicatePolicy, EntryFormatter, ErrorFormatConfig,
    ErrorVec,
};

mod dedup;

/// Accumulates errors and displays them as one combined error.
///
/// Entries keep insertion order. Under a rejecting [`DuplicatePolicy`] a new
/// error matching an accepted entry is discarded.
///
/// # Examples
///
/// ```
/// use jsonerror::{ErrorCollection, MessageError, StructuredError};
///
/// let errors = ErrorCollection::new();
/// errors.add_error(StructuredError::new(1, "bad_input", "value must be positive"));
/// errors.add_error(MessageError::new("disk full"));
/// errors.add_error(None::<MessageError>);
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(
///     errors.error(),
///     "\n0:[code]: 1 [error]: bad_input [message]: value must be positive\n1:disk full"
/// );
/// ```
pub struct ErrorCollection {
    policy: DuplicatePolicy,
    formatter: Option<EntryFormatter>,
    entries: RwLock<ErrorVec<CollectedError>>,
}

impl ErrorCollection {
    /// Creates an empty collection that keeps duplicates.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Creates an empty collection with the given duplicate policy.
    #[inline]
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            formatter: Some(default_formatter()),
            entries: RwLock::new(ErrorVec::new()),
        }
    }

    /// Replaces the formatter with a closure.
    ///
    /// The closure receives each entry's index, the entry, and the string
    /// accumulated so far.
    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(usize, &CollectedError, &mut String) + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Replaces the formatter with a configuration preset.
    #[must_use]
    #[inline]
    pub fn with_format(mut self, config: ErrorFormatConfig) -> Self {
        self.formatter = Some(config.into_formatter());
        self
    }

    /// Removes the formatter; [`error`](Self::error) then yields an empty string.
    #[must_use]
    #[inline]
    pub fn without_formatter(mut self) -> Self {
        self.formatter = None;
        self
    }

    /// Sets or clears the formatter in place.
    #[inline]
    pub fn set_formatter(&mut self, formatter: Option<EntryFormatter>) {
        self.formatter = formatter;
    }

    /// Returns the duplicate policy.
    #[inline]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Returns true if a formatter is installed.
    #[inline]
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// Returns the number of accepted errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Returns true if no error has been accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// Returns a snapshot of the accepted errors in insertion order.
    pub fn entries(&self) -> Vec<CollectedError> {
        self.read_entries().to_vec()
    }

    /// Appends one error. Absent errors (`None`, `Ok`) are ignored.
    pub fn add_error<E: IntoCollectedError>(&self, err: E) {
        let Some(candidate) = err.into_collected_error() else {
            return;
        };
        let mut entries = self.write_entries();
        push_unique(self.policy, &mut entries, candidate);
    }

    /// Appends several errors while holding the write lock for the whole batch.
    ///
    /// Each candidate is checked against the entries accepted so far,
    /// including those accepted earlier in the same batch. The iterator must
    /// not touch this collection.
    pub fn add_errors<I>(&self, errs: I)
    where
        I: IntoIterator,
        I::Item: IntoCollectedError,
    {
        let mut entries = self.write_entries();
        for candidate in errs.into_iter().filter_map(IntoCollectedError::into_collected_error) {
            push_unique(self.policy, &mut entries, candidate);
        }
    }

    /// Appends every entry of `other`, applying this collection's policy.
    ///
    /// `other` is snapshotted under its own read lock, which is released
    /// before this collection's write lock is taken. Merging a collection
    /// into itself is therefore safe.
    pub fn add_error_collection(&self, other: &ErrorCollection) {
        let snapshot = other.entries();

        let mut entries = self.write_entries();
        #[cfg(feature = "tracing")]
        let (offered, before) = (snapshot.len(), entries.len());

        for candidate in snapshot {
            push_unique(self.policy, &mut entries, candidate);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            offered,
            accepted = entries.len() - before,
            policy = ?self.policy,
            "merged error collection"
        );
    }

    /// Builds the combined error string with the installed formatter.
    ///
    /// Returns an empty string when no formatter is set.
    #[must_use]
    pub fn error(&self) -> String {
        let Some(formatter) = &self.formatter else {
            return String::new();
        };

        let entries = self.read_entries();
        let mut combined = String::new();
        for (index, entry) in entries.iter().enumerate() {
            formatter.format_entry(index, entry, &mut combined);
        }
        combined
    }

    fn read_entries(&self) -> RwLockReadGuard<'_, ErrorVec<CollectedError>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, ErrorVec<CollectedError>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Appends `candidate` unless `policy` finds a duplicate among `entries`.
fn push_unique(
    policy: DuplicatePolicy,
    entries: &mut ErrorVec<CollectedError>,
    candidate: CollectedError,
) -> bool {
    if let Some(_index) = dedup::find_duplicate(policy, entries, &candidate) {
        #[cfg(feature = "tracing")]
        tracing::trace!(?policy, matched = _index, error = %candidate, "rejected duplicate error");
        return false;
    }
    entries.push(candidate);
    true
}

impl Default for ErrorCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ErrorCollection {
    /// Copies the policy, the formatter handle and a snapshot of the entries.
    fn clone(&self) -> Self {
        Self {
            policy: self.policy,
            formatter: self.formatter.clone(),
            entries: RwLock::new(ErrorVec::<CollectedError>::clone(&self.read_entries())),
        }
    }
}

impl fmt::Debug for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCollection")
            .field("policy", &self.policy)
            .field("entries", &*self.read_entries())
            .field("has_formatter", &self.has_formatter())
            .finish()
    }
}

impl Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error())
    }
}

impl Error for ErrorCollection {}

impl<E: IntoCollectedError> Extend<E> for ErrorCollection {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.add_errors(iter);
    }
}

impl<E: IntoCollectedError> FromIterator<E> for ErrorCollection {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let collection = Self::new();
        collection.add_errors(iter);
        collection
    }
}

/// Returns true if `err` is absent or an [`ErrorCollection`] with no entries.
///
/// Lets callers treat an empty collection like "no error".
///
/// # Examples
///
/// ```
/// use jsonerror::{is_empty, ErrorCollection, MessageError};
///
/// let errors = ErrorCollection::new();
/// assert!(is_empty(None));
/// assert!(is_empty(Some(&errors)));
///
/// errors.add_error(MessageError::new("boom"));
/// assert!(!is_empty(Some(&errors)));
///
/// let plain = MessageError::new("boom");
/// assert!(!is_empty(Some(&plain)));
/// ```
pub fn is_empty(err: Option<&(dyn Error + 'static)>) -> bool {
    match err {
        None => true,
        Some(err) => err.downcast_ref::<ErrorCollection>().is_some_and(ErrorCollection::is_empty),
    }
}
