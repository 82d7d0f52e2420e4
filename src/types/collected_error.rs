//! Entries held by an [`ErrorCollection`](crate::ErrorCollection).
//!
//! A collection stores either a [`StructuredError`] or an [`OpaqueError`]
//! wrapping any other error value. The split is a closed enum so that duplicate
//! detection can dispatch on it exhaustively.

use core::any::Any;
use core::fmt::{self, Display};
use std::error::Error;
use std::sync::Arc;

use crate::traits::ErrorEq;
use crate::types::StructuredError;

/// One entry of an error collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectedError {
    /// Compared field by field, with a policy-controlled timestamp rule.
    Structured(StructuredError),
    /// Compared through [`ErrorEq`].
    Opaque(OpaqueError),
}

impl CollectedError {
    /// Wraps an arbitrary comparable error.
    ///
    /// A [`StructuredError`] passed here still lands in the `Structured`
    /// variant, and a `CollectedError` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonerror::{CollectedError, StructuredError};
    ///
    /// let entry = CollectedError::from_error(StructuredError::new(5, "x", "y"));
    /// assert!(entry.as_structured().is_some());
    /// ```
    pub fn from_error<E: ErrorEq>(error: E) -> Self {
        OpaqueError::new(error).into()
    }

    /// Returns the structured error, if this entry holds one.
    #[inline]
    pub fn as_structured(&self) -> Option<&StructuredError> {
        match self {
            Self::Structured(err) => Some(err),
            Self::Opaque(_) => None,
        }
    }

    /// Returns the opaque error, if this entry holds one.
    #[inline]
    pub fn as_opaque(&self) -> Option<&OpaqueError> {
        match self {
            Self::Structured(_) => None,
            Self::Opaque(err) => Some(err),
        }
    }

    /// Returns true for the `Structured` variant.
    #[inline]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Attempts to downcast to a concrete error type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Self::Structured(err) => (err as &dyn Any).downcast_ref::<T>(),
            Self::Opaque(err) => err.downcast_ref::<T>(),
        }
    }
}

impl Display for CollectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured(err) => Display::fmt(err, f),
            Self::Opaque(err) => Display::fmt(err, f),
        }
    }
}

impl Error for CollectedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Structured(err) => err.source(),
            Self::Opaque(err) => err.source(),
        }
    }
}

impl From<StructuredError> for CollectedError {
    #[inline]
    fn from(err: StructuredError) -> Self {
        Self::Structured(err)
    }
}

impl From<OpaqueError> for CollectedError {
    fn from(err: OpaqueError) -> Self {
        if let Some(structured) = err.downcast_ref::<StructuredError>() {
            return Self::Structured(structured.clone());
        }
        if let Some(entry) = err.downcast_ref::<CollectedError>() {
            return entry.clone();
        }
        Self::Opaque(err)
    }
}

impl From<MessageError> for CollectedError {
    #[inline]
    fn from(err: MessageError) -> Self {
        Self::Opaque(OpaqueError::new(err))
    }
}

/// Shared, type-erased error with structural equality.
///
/// Cloning is cheap; clones share the wrapped value.
#[derive(Debug, Clone)]
pub struct OpaqueError {
    inner: Arc<dyn ErrorEq>,
}

impl OpaqueError {
    /// Wraps an error whose `PartialEq` defines equality.
    #[inline]
    pub fn new<E: ErrorEq>(error: E) -> Self {
        Self { inner: Arc::new(error) }
    }

    /// Wraps an error that has no `PartialEq`.
    ///
    /// Two such values are equal when they have the same type and the same
    /// `Debug` output, which usually covers fields the display text hides
    /// (the `ErrorKind` of an `io::Error`, for instance). The wrapper is not
    /// visible to [`downcast_ref`](Self::downcast_ref).
    #[inline]
    pub fn by_debug<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(CompareByDebug(error))
    }

    /// Attempts to downcast to a concrete error type.
    #[inline]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_ref().as_any().downcast_ref::<T>()
    }

    /// Borrows the wrapped error.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref().as_error()
    }
}

impl PartialEq for OpaqueError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || self.inner.as_ref().error_eq(other.inner.as_ref())
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.inner.as_ref(), f)
    }
}

impl Error for OpaqueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_ref().source()
    }
}

/// Plain text error, the simplest opaque entry.
///
/// # Examples
///
/// ```
/// use jsonerror::MessageError;
///
/// let err = MessageError::new("connection reset");
/// assert_eq!(err.to_string(), "connection reset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageError(String);

impl MessageError {
    /// Creates a message error.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for MessageError {}

#[derive(Debug)]
struct CompareByDebug<E>(E);

impl<E: fmt::Debug> PartialEq for CompareByDebug<E> {
    fn eq(&self, other: &Self) -> bool {
        format!("{:?}", self.0) == format!("{:?}", other.0)
    }
}

impl<E: Display> Display for CompareByDebug<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<E: Error + 'static> Error for CompareByDebug<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}
