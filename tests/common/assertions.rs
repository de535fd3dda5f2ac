//! Domain-specific assertions for slogger harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that make it clear
//! which normalisation invariant was violated.

use pretty_assertions::assert_eq;
use serde_json::Value;
use slogger::{AttributeSet, MISC_FIELDS_KEY};

/// Assert that an attribute set holds exactly the entries of `expected`
/// (a JSON object literal).
#[track_caller]
pub fn assert_attrs_eq(attrs: &AttributeSet, expected: Value) {
    let actual = serde_json::to_value(attrs).expect("attribute sets serialise");
    assert_eq!(actual, expected);
}

/// Assert that `key` maps to `expected`.
#[track_caller]
pub fn assert_has_attr(attrs: &AttributeSet, key: &str, expected: Value) {
    match attrs.get(key) {
        Some(actual) if *actual == expected => {}
        Some(actual) => panic!(
            "assert_has_attr failed:\n  attrs[{key:?}]\n  expected: {expected}\n  actual:   {actual}"
        ),
        None => panic!(
            "assert_has_attr failed: key {key:?} not found.\n  Available keys: {:?}",
            attrs.keys().collect::<Vec<_>>()
        ),
    }
}

/// Assert that the unpaired tail landed under `miscFields`.
#[track_caller]
pub fn assert_misc_fields(attrs: &AttributeSet, expected: Value) {
    assert_has_attr(attrs, MISC_FIELDS_KEY, expected);
}

/// Assert that a serialised record carries only the fixed keys and no
/// attributes.
#[track_caller]
pub fn assert_bare_record(record: &Value) {
    let keys: Vec<&str> = record
        .as_object()
        .expect("record must be a JSON object")
        .keys()
        .map(String::as_str)
        .filter(|k| !matches!(*k, "time" | "level" | "msg" | "err"))
        .collect();
    assert!(
        keys.is_empty(),
        "record should carry no attributes, found {keys:?} in {record}"
    );
}
