use crate::types::{CollectedError, MessageError, OpaqueError, StructuredError};

/// Conversion trait for values that can be appended to an
/// [`ErrorCollection`](crate::ErrorCollection).
///
/// Returning `None` means "no error"; the collection skips such values.
///
/// # Examples
///
/// ```
/// use jsonerror::traits::IntoCollectedError;
/// use jsonerror::StructuredError;
///
/// let absent: Option<StructuredError> = None;
/// assert!(absent.into_collected_error().is_none());
///
/// let ok: Result<u8, StructuredError> = Ok(1);
/// assert!(ok.into_collected_error().is_none());
///
/// assert!("timeout".into_collected_error().is_some());
/// ```
pub trait IntoCollectedError {
    fn into_collected_error(self) -> Option<CollectedError>;
}

impl IntoCollectedError for CollectedError {
    #[inline]
    fn into_collected_error(self) -> Option<CollectedError> {
        Some(self)
    }
}

impl IntoCollectedError for StructuredError {
    #[inline]
    fn into_collected_error(self) -> Option<CollectedError> {
        Some(CollectedError::Structured(self))
    }
}

impl IntoCollectedError for OpaqueError {
    #[inline]
    fn into_collected_error(self) -> Option<CollectedError> {
        Some(self.into())
    }
}

impl IntoCollectedError for MessageError {
    #[inline]
    fn into_collected_error(self) -> Option<CollectedError> {
        Some(self.into())
    }
}

impl IntoCollectedError for &str {
    #[inline]
    fn into_collected_error(self) -> Option<CollectedError> {
        Some(MessageError::new(self).into())
    }
}

impl IntoCollectedError for String {
    #[inline]
    fn into_collected_error(self) -> Option<CollectedError> {
        Some(MessageError::new(self).into())
    }
}

impl IntoCollectedError for std::io::Error {
    #[inline]
    fn into_collected_error(self) -> Option<CollectedError> {
        Some(CollectedError::Opaque(OpaqueError::by_debug(self)))
    }
}

impl<T: IntoCollectedError> IntoCollectedError for Option<T> {
    #[inline]
    fn into_collected_error(self) -> Option<CollectedError> {
        self.and_then(IntoCollectedError::into_collected_error)
    }
}

impl<U, T: IntoCollectedError> IntoCollectedError for Result<U, T> {
    #[inline]
    fn into_collected_error(self) -> Option<CollectedError> {
        self.err().and_then(IntoCollectedError::into_collected_error)
    }
}
