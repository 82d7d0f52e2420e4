use core::any::Any;
use std::error::Error;

/// Structural equality between type-erased errors.
///
/// Implemented for every `Error + PartialEq` type. Two values compare equal
/// only when they share a concrete type and that type's `PartialEq` agrees.
///
/// # Examples
///
/// ```
/// use jsonerror::traits::ErrorEq;
/// use jsonerror::MessageError;
///
/// let a: &dyn ErrorEq = &MessageError::new("disk full");
/// let b: &dyn ErrorEq = &MessageError::new("disk full");
/// assert!(a.error_eq(b));
/// ```
pub trait ErrorEq: Error + Send + Sync + 'static {
    /// Upcasts to `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts to a thread-safe `Error` trait object.
    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static);

    /// Returns true if `other` has the same concrete type and is equal.
    fn error_eq(&self, other: &dyn ErrorEq) -> bool;
}

impl<T> ErrorEq for T
where
    T: Error + PartialEq + Send + Sync + 'static,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self
    }

    #[inline]
    fn error_eq(&self, other: &dyn ErrorEq) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|other| self == other)
    }
}
