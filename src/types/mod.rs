//! Error types and utilities.
//!
//! This module provides the structured error value, the entries a collection
//! stores, duplicate policies and formatting configuration.
//!
//! # Examples
//!
//! ```
//! use jsonerror::StructuredError;
//!
//! let err = StructuredError::new(404, "not_found", "user does not exist");
//!
//! println!("{}", err);
//! // Output: [code]: 404 [error]: not_found [message]: user does not exist
//! ```
use std::collections::BTreeMap;

use smallvec::SmallVec;

pub mod collected_error;
pub mod duplicate_policy;
pub mod error_formatter;
pub mod structured_error;

pub use collected_error::*;
pub use duplicate_policy::*;
pub use error_formatter::*;
pub use structured_error::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for up to 1 element to avoid heap allocations
/// in the common case where a single error is collected.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Key/value body produced by [`StructuredError::render`].
pub type Rendered = BTreeMap<&'static str, String>;
