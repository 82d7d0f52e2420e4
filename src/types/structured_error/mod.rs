//! Coded error value with JSON-ready rendering.
//!
//! This module provides [`StructuredError`], an immutable error carrying:
//! - A caller-assigned numeric code
//! - A short label (rendered under the `"error"` key) and a longer message
//! - An optional domain that lets independent producers reuse codes
//! - The creation time, optionally shown in the display form

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Rendered;

mod traits;

/// Error value with a numeric code, label, message and optional domain.
///
/// All fields are fixed at construction. Duplicate detection in
/// [`ErrorCollection`](crate::ErrorCollection) relies on this.
///
/// # Examples
///
/// ```
/// use jsonerror::StructuredError;
///
/// let err = StructuredError::new(1, "bad_input", "value must be positive").in_domain("billing");
///
/// assert_eq!(
///     err.to_string(),
///     "[code]: 1 [error]: bad_input [message]: value must be positive [domain]: billing"
/// );
/// assert_eq!(err.render().get("error").map(String::as_str), Some("bad_input"));
/// assert!(err.render().get("domain").is_none());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuredError {
    pub(crate) code: i64,
    pub(crate) label: String,
    pub(crate) message: String,
    pub(crate) domain: Option<String>,
    pub(crate) created_at: SystemTime,
    pub(crate) display_time: bool,
}

impl StructuredError {
    /// Creates an error stamped with the current time, without a domain.
    #[inline]
    pub fn new(code: i64, label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new_at(code, label, message, SystemTime::now())
    }

    /// Creates an error whose display form includes the creation timestamp.
    #[inline]
    pub fn with_visible_time(
        code: i64,
        label: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { display_time: true, ..Self::new(code, label, message) }
    }

    /// Creates an error with an explicit creation time.
    ///
    /// Useful when replaying recorded errors, where the original timestamp
    /// must survive so that strict duplicate rejection still recognises them.
    pub fn new_at(
        code: i64,
        label: impl Into<String>,
        message: impl Into<String>,
        created_at: SystemTime,
    ) -> Self {
        Self {
            code,
            label: label.into(),
            message: message.into(),
            domain: None,
            created_at,
            display_time: false,
        }
    }

    /// Attaches the domain. An empty domain leaves the error without one.
    #[inline]
    pub fn in_domain(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        self.domain = if domain.is_empty() { None } else { Some(domain) };
        self
    }

    /// Returns the numeric code.
    #[inline]
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Returns the short label; may be empty.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the descriptive message; may be empty.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the domain, if one was set.
    #[inline]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Returns the time the error was created.
    #[inline]
    pub fn creation_time(&self) -> SystemTime {
        self.created_at
    }

    /// Whether the display form includes the creation timestamp.
    #[inline]
    pub fn displays_time(&self) -> bool {
        self.display_time
    }

    /// Creation time as signed nanoseconds since the Unix epoch.
    pub fn unix_nanos(&self) -> i128 {
        match self.created_at.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos() as i128,
            Err(before) => -(before.duration().as_nanos() as i128),
        }
    }

    /// Compares code, domain, label and message, ignoring the timestamp.
    #[inline]
    pub fn same_fields(&self, other: &Self) -> bool {
        self.code == other.code
            && self.domain == other.domain
            && self.label == other.label
            && self.message == other.message
    }

    /// Produces the minimal key/value body for API responses.
    ///
    /// `"code"` is always present; `"error"` and `"message"` only when the
    /// label or message is non-empty. Domain and timestamp are never included.
    #[must_use]
    pub fn render(&self) -> Rendered {
        let mut rendered = Rendered::new();
        rendered.insert("code", self.code.to_string());
        if !self.label.is_empty() {
            rendered.insert("error", self.label.clone());
        }
        if !self.message.is_empty() {
            rendered.insert("message", self.message.clone());
        }
        rendered
    }
}
