use jsonerror::traits::ErrorEq;
use jsonerror::{MessageError, StructuredError};

#[test]
fn equal_values_of_same_type_match() {
    let a = MessageError::new("x");
    let b = MessageError::new("x");
    assert!(a.error_eq(&b));
}

#[test]
fn unequal_values_do_not_match() {
    let a = MessageError::new("x");
    let b = MessageError::new("y");
    assert!(!a.error_eq(&b));
}

#[test]
fn different_types_do_not_match() {
    let a = MessageError::new("[code]: 1");
    let b = StructuredError::new(1, "", "");
    assert!(!a.error_eq(&b));
    assert!(!b.error_eq(&a));
}

#[test]
fn as_any_exposes_concrete_type() {
    let err: &dyn ErrorEq = &MessageError::new("x");
    assert!(err.as_any().downcast_ref::<MessageError>().is_some());
    assert_eq!(err.as_error().to_string(), "x");
}
