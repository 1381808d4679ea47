//! Tests for TOML rule file loading and validation.

use std::io::Write;

use softsell_common::rule_file::{load_rule_set, resolve_rule_set};
use softsell_common::{IntentResponder, SoftsellError};

fn write_temp_rules(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_valid_rule_file() {
    let file = write_temp_rules(
        r#"
        fallback = "Please email support."

        [[rules]]
        trigger = "Opening Hours"
        response = "We're open 9 to 5."

        [[rules]]
        trigger = "refund"
        response = "Refunds take 5 business days."
        "#,
    );

    let set = load_rule_set(file.path()).expect("rule file should load");
    assert_eq!(set.len(), 2);
    assert_eq!(set.rules()[0].trigger, "opening hours");
    assert_eq!(set.fallback(), "Please email support.");

    let responder = IntentResponder::new(set);
    assert_eq!(responder.respond("what are your OPENING HOURS?"), "We're open 9 to 5.");
    assert_eq!(responder.respond("anything else"), "Please email support.");
}

#[test]
fn test_rule_file_order_is_priority() {
    let file = write_temp_rules(
        r#"
        fallback = "fallback"

        [[rules]]
        trigger = "license"
        response = "first listed"

        [[rules]]
        trigger = "sell my license"
        response = "second listed"
        "#,
    );

    let responder = IntentResponder::new(load_rule_set(file.path()).unwrap());
    assert_eq!(responder.respond("sell my license"), "first listed");
}

#[test]
fn test_empty_trigger_reports_index() {
    let file = write_temp_rules(
        r#"
        fallback = "fallback"

        [[rules]]
        trigger = "ok"
        response = "fine"

        [[rules]]
        trigger = "   "
        response = "unreachable"
        "#,
    );

    match load_rule_set(file.path()) {
        Err(SoftsellError::EmptyTrigger { index }) => assert_eq!(index, 1),
        other => panic!("expected EmptyTrigger, got {:?}", other),
    }
}

#[test]
fn test_empty_fallback_rejected() {
    let file = write_temp_rules(
        r#"
        fallback = ""

        [[rules]]
        trigger = "ok"
        response = "fine"
        "#,
    );

    assert!(matches!(
        load_rule_set(file.path()),
        Err(SoftsellError::EmptyFallback)
    ));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let file = write_temp_rules("this is not toml [[[");
    assert!(matches!(
        load_rule_set(file.path()),
        Err(SoftsellError::Parse(_))
    ));
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-rules.toml");
    assert!(matches!(
        resolve_rule_set(Some(&missing)),
        Err(SoftsellError::Io(_))
    ));
}

#[test]
fn test_explicit_path_overrides_builtin() {
    let file = write_temp_rules(
        r#"
        fallback = "custom fallback"
        "#,
    );

    let set = resolve_rule_set(Some(file.path())).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.fallback(), "custom fallback");
}
