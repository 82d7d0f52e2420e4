//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use jsonerror::prelude::*;
//!
//! fn validate(age: i64, errors: &ErrorCollection) {
//!     if age < 0 {
//!         errors.add_error(StructuredError::new(1, "bad_input", "age must be positive"));
//!     }
//! }
//!
//! let errors = ErrorCollection::new();
//! validate(-3, &errors);
//! assert!(!is_empty(Some(&errors)));
//! ```

// Core types
pub use crate::collection::{is_empty, ErrorCollection};
pub use crate::types::{CollectedError, DuplicatePolicy, MessageError, StructuredError};

// Traits
pub use crate::traits::IntoCollectedError;
