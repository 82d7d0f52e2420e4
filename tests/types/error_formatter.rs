use jsonerror::{CollectedError, EntryFormat, ErrorCollection, ErrorFormatConfig, MessageError};

fn collection_with(config: ErrorFormatConfig) -> ErrorCollection {
    let errors = ErrorCollection::new().with_format(config);
    errors.add_errors(["first", "second", "third"]);
    errors
}

#[test]
fn numbered_is_the_default_layout() {
    assert_eq!(ErrorFormatConfig::numbered(), ErrorFormatConfig::default());
    assert_eq!(
        collection_with(ErrorFormatConfig::numbered()).error(),
        "\n0:first\n1:second\n2:third"
    );
}

#[test]
fn compact_joins_on_one_line() {
    assert_eq!(collection_with(ErrorFormatConfig::compact()).error(), "first | second | third");
}

#[test]
fn plain_puts_each_entry_on_its_own_line() {
    assert_eq!(collection_with(ErrorFormatConfig::plain()).error(), "first\nsecond\nthird");
}

#[test]
fn config_fields_combine() {
    let config = ErrorFormatConfig {
        separator: "; ".into(),
        index_suffix: ") ".into(),
        ..ErrorFormatConfig::compact()
    };
    let config = ErrorFormatConfig { show_index: true, ..config };

    assert_eq!(collection_with(config).error(), "0) first; 1) second; 2) third");
}

#[test]
fn empty_collection_formats_to_empty_string() {
    let errors = ErrorCollection::new().with_format(ErrorFormatConfig::compact());
    assert_eq!(errors.error(), "");
}

#[test]
fn closures_implement_entry_format() {
    let formatter = |i: usize, err: &CollectedError, out: &mut String| {
        out.push_str(&format!("<{i}:{err}>"));
    };

    let mut out = String::new();
    formatter.format_entry(0, &MessageError::new("a").into(), &mut out);
    formatter.format_entry(1, &MessageError::new("b").into(), &mut out);
    assert_eq!(out, "<0:a><1:b>");
}

#[test]
fn config_appends_to_existing_accumulator() {
    let mut out = String::from("errors:");
    ErrorFormatConfig::default().format_entry(0, &MessageError::new("a").into(), &mut out);
    assert_eq!(out, "errors:\n0:a");
}
