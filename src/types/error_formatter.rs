//! Formatting of the combined collection output.

use core::fmt::Write;
use std::sync::Arc;

use crate::types::CollectedError;

/// Trait for customizing how each collection entry is appended to the
/// combined error string.
///
/// Implemented for [`ErrorFormatConfig`] and for every
/// `Fn(usize, &CollectedError, &mut String)` closure.
pub trait EntryFormat {
    /// Appends the entry at `index` to `out`.
    fn format_entry(&self, index: usize, entry: &CollectedError, out: &mut String);
}

impl<F> EntryFormat for F
where
    F: Fn(usize, &CollectedError, &mut String),
{
    #[inline]
    fn format_entry(&self, index: usize, entry: &CollectedError, out: &mut String) {
        self(index, entry, out)
    }
}

/// Shared formatter installed on an [`ErrorCollection`](crate::ErrorCollection).
pub type EntryFormatter = Arc<dyn EntryFormat + Send + Sync>;

/// Configuration-based entry formatter.
///
/// The default reproduces the numbered layout: every entry on its own line,
/// prefixed by its zero-based index.
///
/// # Examples
///
/// ```
/// use jsonerror::{ErrorCollection, ErrorFormatConfig, MessageError};
///
/// let errors = ErrorCollection::new().with_format(ErrorFormatConfig::compact());
/// errors.add_error(MessageError::new("first"));
/// errors.add_error(MessageError::new("second"));
///
/// assert_eq!(errors.error(), "first | second");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub leading_separator: bool,
    pub show_index: bool,
    pub index_suffix: String,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: "\n".into(),
            leading_separator: true,
            show_index: true,
            index_suffix: ":".into(),
        }
    }
}

impl ErrorFormatConfig {
    /// `"\n0:first\n1:second"`
    #[inline]
    pub fn numbered() -> Self {
        Self::default()
    }

    /// `"first | second"`
    #[inline]
    pub fn compact() -> Self {
        Self {
            separator: " | ".into(),
            leading_separator: false,
            show_index: false,
            ..Default::default()
        }
    }

    /// `"first\nsecond"`
    #[inline]
    pub fn plain() -> Self {
        Self { leading_separator: false, show_index: false, ..Default::default() }
    }

    /// Wraps the configuration into a formatter handle.
    #[inline]
    pub fn into_formatter(self) -> EntryFormatter {
        Arc::new(self)
    }
}

impl EntryFormat for ErrorFormatConfig {
    fn format_entry(&self, index: usize, entry: &CollectedError, out: &mut String) {
        if index > 0 || self.leading_separator {
            out.push_str(&self.separator);
        }
        if self.show_index {
            let _ = write!(out, "{}{}", index, self.index_suffix);
        }
        let _ = write!(out, "{}", entry);
    }
}

/// The formatter a new collection starts with.
#[inline]
pub fn default_formatter() -> EntryFormatter {
    ErrorFormatConfig::default().into_formatter()
}
