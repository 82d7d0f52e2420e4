//! Core traits for comparing and collecting errors.
//!
//! - [`ErrorEq`]: Structural equality between type-erased errors
//! - [`IntoCollectedError`]: Conversion of values (including absent ones) into
//!   collection entries
//!
//! # Examples
//!
//! ```
//! use jsonerror::traits::IntoCollectedError;
//! use jsonerror::{CollectedError, MessageError};
//!
//! let entry = MessageError::new("failed").into_collected_error();
//! assert!(matches!(entry, Some(CollectedError::Opaque(_))));
//! ```

pub mod error_eq;
pub mod into_collected_error;

pub use error_eq::ErrorEq;
pub use into_collected_error::IntoCollectedError;
