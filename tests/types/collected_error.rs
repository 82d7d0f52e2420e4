use std::error::Error;
use std::io;

use jsonerror::{CollectedError, MessageError, OpaqueError, StructuredError};

#[test]
fn from_error_normalizes_structured_errors() {
    let entry = CollectedError::from_error(StructuredError::new(5, "x", "y"));
    assert!(entry.is_structured());
    assert_eq!(entry.as_structured().map(StructuredError::code), Some(5));
    assert!(entry.as_opaque().is_none());
}

#[test]
fn from_error_unwraps_collected_errors() {
    let structured = CollectedError::from(StructuredError::new(7, "x", ""));
    let entry = CollectedError::from_error(structured.clone());
    assert_eq!(entry, structured);
    assert!(entry.is_structured());

    let opaque = CollectedError::from(MessageError::new("timeout"));
    let entry: CollectedError = OpaqueError::new(opaque.clone()).into();
    assert_eq!(entry, opaque);
    assert!(entry.downcast_ref::<MessageError>().is_some());
}

#[test]
fn by_debug_distinguishes_hidden_fields() {
    let not_found = OpaqueError::by_debug(io::Error::new(io::ErrorKind::NotFound, "config"));
    let denied = OpaqueError::by_debug(io::Error::new(io::ErrorKind::PermissionDenied, "config"));

    assert_eq!(not_found.to_string(), denied.to_string());
    assert_ne!(not_found, denied);
    assert_eq!(
        not_found,
        OpaqueError::by_debug(io::Error::new(io::ErrorKind::NotFound, "config"))
    );
}

#[test]
fn opaque_entries_downcast_to_their_type() {
    let entry: CollectedError = MessageError::new("timeout").into();

    assert!(!entry.is_structured());
    assert_eq!(entry.downcast_ref::<MessageError>().map(MessageError::message), Some("timeout"));
    assert!(entry.downcast_ref::<StructuredError>().is_none());
}

#[test]
fn structured_entries_downcast_too() {
    let entry: CollectedError = StructuredError::new(1, "", "").into();
    assert!(entry.downcast_ref::<StructuredError>().is_some());
    assert!(entry.downcast_ref::<MessageError>().is_none());
}

#[test]
fn display_delegates_to_wrapped_error() {
    let structured: CollectedError = StructuredError::new(1, "x", "").into();
    let opaque: CollectedError = MessageError::new("plain").into();

    assert_eq!(structured.to_string(), "[code]: 1 [error]: x");
    assert_eq!(opaque.to_string(), "plain");
}

#[test]
fn opaque_clones_compare_equal() {
    let err = OpaqueError::by_debug(io::Error::new(io::ErrorKind::Other, "broken pipe"));
    assert_eq!(err.clone(), err);
}

#[test]
fn by_debug_keeps_source_and_text() {
    #[derive(Debug)]
    struct Wrapper(io::Error);

    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("wrapper failed")
        }
    }

    impl Error for Wrapper {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    let root = io::Error::new(io::ErrorKind::Other, "root cause");
    let err = OpaqueError::by_debug(Wrapper(root));
    assert_eq!(err.to_string(), "wrapper failed");
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("root cause"));
    assert_eq!(err.as_error().to_string(), "wrapper failed");
}

#[test]
fn message_error_exposes_message() {
    let err = MessageError::new("disk full");
    assert_eq!(err.message(), "disk full");
    assert_eq!(err.to_string(), "disk full");
    assert!(err.source().is_none());
}
