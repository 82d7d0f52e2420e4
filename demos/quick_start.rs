//! Example: collecting coded errors
//!
//! Builds a few `StructuredError`s, feeds them into collections with each
//! duplicate policy, and prints the combined error.

use jsonerror::{is_empty, DuplicatePolicy, ErrorCollection, ErrorFormatConfig, StructuredError};

fn validate_user(name: &str, age: i64) -> Vec<StructuredError> {
    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(StructuredError::new(1, "bad_input", "name is required").in_domain("accounts"));
    }
    if age < 0 {
        let err = StructuredError::new(2, "bad_input", "age must be positive");
        errors.push(err.in_domain("accounts"));
    }
    errors
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. A single error, as a log line and as a REST body
    println!("\n1. Structured error:");
    let err = StructuredError::with_visible_time(404, "not_found", "no such invoice")
        .in_domain("billing");
    println!("Display: {}", err);
    println!("Rendered: {:?}", err.render());

    // 2. The same failures reported twice under each policy
    println!("\n2. Duplicate policies:");
    let policies = [
        DuplicatePolicy::AllowDuplicates,
        DuplicatePolicy::RejectDuplicatesIgnoringTimestamp,
        DuplicatePolicy::RejectDuplicatesStrict,
    ];
    for policy in policies {
        let errors = ErrorCollection::with_policy(policy);
        errors.add_errors(validate_user("", -3));
        errors.add_errors(validate_user("", -3));
        println!("{:?}: {} entries", policy, errors.len());
    }

    // 3. Combined error text
    println!("\n3. Combined error:");
    let errors = ErrorCollection::with_policy(DuplicatePolicy::RejectDuplicatesIgnoringTimestamp);
    errors.add_errors(validate_user("", -3));
    errors.add_error("upstream timeout");
    errors.add_error(None::<StructuredError>);
    println!("Numbered:{}", errors);

    let compact = errors.clone().with_format(ErrorFormatConfig::compact());
    println!("Compact: {}", compact);

    // 4. Checking for errors before returning them
    println!("\n4. Empty check:");
    let clean = ErrorCollection::new();
    clean.add_errors(validate_user("ada", 36));
    println!("clean input is empty: {}", is_empty(Some(&clean)));
    println!("bad input is empty: {}", is_empty(Some(&errors)));
}
