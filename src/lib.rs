//! Coded errors with JSON-ready rendering, and a thread-safe collection that
//! merges many errors into one.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `jsonerror::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Structured Error
//!
//! ```
//! use jsonerror::StructuredError;
//!
//! let err = StructuredError::new(1, "bad_input", "value must be positive");
//!
//! assert_eq!(err.to_string(), "[code]: 1 [error]: bad_input [message]: value must be positive");
//!
//! let body = err.render();
//! assert_eq!(body["code"], "1");
//! assert_eq!(body["error"], "bad_input");
//! assert_eq!(body["message"], "value must be positive");
//! ```
//!
//! ## Collecting Errors
//!
//! ```
//! use jsonerror::{is_empty, DuplicatePolicy, ErrorCollection, StructuredError};
//!
//! let errors = ErrorCollection::with_policy(DuplicatePolicy::RejectDuplicatesIgnoringTimestamp);
//! assert!(is_empty(Some(&errors)));
//!
//! errors.add_error(StructuredError::new(5, "x", "y").in_domain("domainA"));
//! errors.add_error(StructuredError::new(5, "x", "y").in_domain("domainA"));
//! assert_eq!(errors.len(), 1);
//! assert!(!is_empty(Some(&errors)));
//! ```
//!
//! ## Custom Formatting
//!
//! ```
//! use jsonerror::{ErrorCollection, MessageError};
//!
//! let errors = ErrorCollection::new().with_formatter(|i, err, out| {
//!     if i > 0 {
//!         out.push_str("; ");
//!     }
//!     out.push_str(&err.to_string());
//! });
//! errors.add_errors([MessageError::new("a"), MessageError::new("b")]);
//!
//! assert_eq!(errors.to_string(), "a; b");
//! ```

/// Thread-safe error accumulation
pub mod collection;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for comparing and collecting errors
pub mod traits;
/// StructuredError, collection entries, policies and formatting
pub mod types;

pub use collection::{is_empty, ErrorCollection};
pub use traits::*;
pub use types::{
    CollectedError, DuplicatePolicy, EntryFormat, EntryFormatter, ErrorFormatConfig, ErrorVec,
    MessageError, OpaqueError, Rendered, StructuredError,
};
