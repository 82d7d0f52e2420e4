//! Example: JSON bodies with Serde
//!
//! Serializes `StructuredError` into the body a REST handler would send.
//! Only `code`, `error` and `message` are emitted; the domain and the
//! timestamp stay out of the body.

use jsonerror::StructuredError;

fn main() {
    let err = StructuredError::with_visible_time(422, "bad_input", "amount must be positive")
        .in_domain("billing");

    // The log line keeps every field
    println!("Log line:\n{}", err);

    match serde_json::to_string_pretty(&err) {
        Ok(json) => println!("\nResponse body:\n{}", json),
        Err(e) => eprintln!("Failed to serialize error: {}", e),
    }

    // An empty label is left out of the body
    let bare = StructuredError::new(500, "", "internal error");
    match serde_json::to_string(&bare) {
        Ok(json) => println!("\nWithout label: {}", json),
        Err(e) => eprintln!("Failed to serialize error: {}", e),
    }

    // Handlers that build their own body can use the rendered map directly
    for (key, value) in err.render() {
        println!("{key} = {value}");
    }
}
