//! Call-site argument corpora used across harnesses.
//!
//! Each fixture mirrors a realistic logging call: key/value pairs mixed with
//! embedded maps and stray trailing values.

use serde_json::{json, Value};
use slogger::{args, RawArgument};
use std::collections::BTreeMap;

/// Build an embedded-map argument from a JSON object literal.
pub fn map_arg(value: Value) -> RawArgument {
    match value {
        Value::Object(map) => RawArgument::from(map),
        other => panic!("map_arg expects a JSON object, got {other}"),
    }
}

/// Build a `BTreeMap` from a JSON object literal.
pub fn object(value: Value) -> BTreeMap<String, Value> {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        other => panic!("object expects a JSON object, got {other}"),
    }
}

/// Pairs with an unpaired trailing scalar.
pub fn misc_tail_args() -> Vec<RawArgument> {
    args!["one", "two", "Another", false, "four", true, "bob"]
}

/// Even pairs only.
pub fn even_pair_args() -> Vec<RawArgument> {
    args!["one", "two", "Another", false, "four", true]
}

/// Pairs followed by an embedded map at an even index (odd tail).
pub fn map_tail_args() -> Vec<RawArgument> {
    args![
        "key",
        "value",
        "AnotherKey",
        false,
        "four",
        123123,
        map_arg(json!({"testOne": 42069, "testTwo": false})),
    ]
}

/// Embedded map paired with a scalar, then a scalar tail.
pub fn many_values_args() -> Vec<RawArgument> {
    args![
        "key",
        "value",
        "AnotherKey",
        false,
        "four",
        123123,
        map_arg(json!({"MORETEST": 123123, "TestAgain": false})),
        "more",
        123123,
    ]
}

/// Integer and boolean keys.
pub fn coerced_key_args() -> Vec<RawArgument> {
    args![42, "x", true, "y"]
}

/// Arguments typical of an error call site.
pub fn error_call_args() -> Vec<RawArgument> {
    args![1, 2, 3, "masdasd"]
}

/// A realistic request-log call with nested values.
pub fn request_args() -> Vec<RawArgument> {
    args![
        "method",
        "POST",
        "path",
        "/api/v1/payments",
        "status",
        200,
        "latency_ms",
        47.5,
        map_arg(json!({"request_id": "req-abc123", "user": {"id": 42}})),
        map_arg(json!({"gateway": "stripe"})),
    ]
}
