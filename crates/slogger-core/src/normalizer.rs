//! Normalizer: folds raw call-site arguments into one [`AttributeSet`].
//!
//! Arguments are consumed two at a time as candidate key/value pairs. A pair
//! is classified by which of its halves are embedded maps:
//!
//! | first | second | effect |
//! |-------|--------|--------|
//! | map   | scalar | scalar inserted standalone, then the map merged |
//! | scalar| map    | scalar inserted standalone, then the map merged |
//! | map   | map    | second merged over first, union merged |
//! | scalar| scalar | first is the key, second the value |
//!
//! A *standalone* scalar becomes a key (same coercion as any other key) with
//! an empty string value. An unpaired trailing scalar is kept under
//! [`MISC_FIELDS_KEY`]; an unpaired trailing map is merged.
//!
//! Keys that are neither strings, integers nor booleans have no key form and
//! the pair they head is dropped. That is the only way an argument can
//! disappear.

use serde_json::Value;

use crate::types::{AttributeSet, RawArgument, MISC_FIELDS_KEY};

/// Normalise the arguments of one logging call.
///
/// Pure and total: it never fails and holds no state between calls.
pub fn normalize(args: Vec<RawArgument>) -> AttributeSet {
    let mut attrs = AttributeSet::new();
    let single = args.len() == 1;

    let mut iter = args.into_iter();
    while let Some(first) = iter.next() {
        match iter.next() {
            Some(second) => absorb_pair(&mut attrs, first, second),
            None if single => absorb_single(&mut attrs, first),
            None => absorb_tail(&mut attrs, first),
        }
    }

    attrs
}

fn absorb_pair(attrs: &mut AttributeSet, first: RawArgument, second: RawArgument) {
    match (first, second) {
        (RawArgument::Map(mut joined), RawArgument::Map(next)) => {
            joined.extend(next);
            attrs.merge(joined);
        }
        (RawArgument::Map(map), standalone) | (standalone, RawArgument::Map(map)) => {
            insert_standalone(attrs, &standalone);
            attrs.merge(map);
        }
        (key, value) => insert_coerced(attrs, &key, value.into_value()),
    }
}

fn absorb_single(attrs: &mut AttributeSet, arg: RawArgument) {
    match arg {
        RawArgument::Map(map) => attrs.merge(map),
        standalone => insert_standalone(attrs, &standalone),
    }
}

fn absorb_tail(attrs: &mut AttributeSet, arg: RawArgument) {
    match arg {
        RawArgument::Map(map) => attrs.merge(map),
        scalar => attrs.insert(MISC_FIELDS_KEY, scalar.into_value()),
    }
}

fn insert_standalone(attrs: &mut AttributeSet, standalone: &RawArgument) {
    insert_coerced(attrs, standalone, Value::String(String::new()));
}

fn insert_coerced(attrs: &mut AttributeSet, key: &RawArgument, value: Value) {
    if let Some(key) = key.as_key() {
        attrs.insert(key, value);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn map(value: Value) -> BTreeMap<String, Value> {
        match value {
            Value::Object(m) => m.into_iter().collect(),
            other => panic!("not an object: {other}"),
        }
    }

    fn as_json(attrs: AttributeSet) -> Value {
        serde_json::to_value(attrs).unwrap()
    }

    #[test]
    fn empty_input() {
        assert!(normalize(vec![]).is_empty());
    }

    #[test]
    fn single_map_passes_through() {
        let m = map(json!({"one": false, "two": 2}));
        let attrs = normalize(args![m.clone()]);
        assert_eq!(attrs.into_inner(), m);
    }

    #[test]
    fn single_scalar_becomes_key_with_empty_value() {
        assert_eq!(as_json(normalize(args!["bob"])), json!({"bob": ""}));
        assert_eq!(as_json(normalize(args![7])), json!({"7": ""}));
        assert!(normalize(args![1.5]).is_empty());
    }

    #[test]
    fn plain_pairs() {
        assert_eq!(
            as_json(normalize(args!["a", 1, "b", "two"])),
            json!({"a": 1, "b": "two"})
        );
    }

    #[test]
    fn non_string_keys_coerced() {
        assert_eq!(
            as_json(normalize(args![42, "x", true, "y"])),
            json!({"42": "x", "true": "y"})
        );
    }

    #[test]
    fn unsupported_key_drops_pair() {
        assert_eq!(
            as_json(normalize(args![1.5, "lost", "kept", 1])),
            json!({"kept": 1})
        );
        assert_eq!(
            as_json(normalize(args![Value::Null, "lost"])),
            json!({})
        );
    }

    #[test]
    fn odd_scalar_tail_goes_to_misc_fields() {
        assert_eq!(
            as_json(normalize(args!["one", "two", "Another", false, "four", true, "bob"])),
            json!({"one": "two", "Another": false, "four": true, "miscFields": "bob"})
        );
    }

    #[test]
    fn odd_map_tail_is_merged() {
        assert_eq!(
            as_json(normalize(args![
                "key", "value", "AnotherKey", false, "four", 123123,
                map(json!({"testOne": 42069, "testTwo": false}))
            ])),
            json!({
                "key": "value", "AnotherKey": false, "four": 123123,
                "testOne": 42069, "testTwo": false
            })
        );
    }

    #[test]
    fn map_then_scalar_pair() {
        assert_eq!(
            as_json(normalize(args![map(json!({"a": 1})), "flag"])),
            json!({"a": 1, "flag": ""})
        );
    }

    #[test]
    fn scalar_then_map_pair() {
        assert_eq!(
            as_json(normalize(args!["flag", map(json!({"a": 1}))])),
            json!({"a": 1, "flag": ""})
        );
    }

    #[test]
    fn merged_map_overwrites_standalone_key() {
        assert_eq!(
            as_json(normalize(args!["a", map(json!({"a": 1}))])),
            json!({"a": 1})
        );
    }

    #[test]
    fn second_map_wins_on_collision() {
        assert_eq!(
            as_json(normalize(args![
                map(json!({"a": 1, "b": 1})),
                map(json!({"b": 2, "c": 2}))
            ])),
            json!({"a": 1, "b": 2, "c": 2})
        );
    }

    #[test]
    fn later_pairs_overwrite_earlier_keys() {
        assert_eq!(
            as_json(normalize(args!["a", 1, map(json!({"a": 2})), map(json!({})), "a", 3])),
            json!({"a": 3})
        );
    }

    #[test]
    fn only_one_misc_fields_survives() {
        assert_eq!(
            as_json(normalize(args!["miscFields", "early", "x", 1, "late"])),
            json!({"miscFields": "late", "x": 1})
        );
    }

    #[test]
    fn mixed_pairs_and_tail() {
        assert_eq!(
            as_json(normalize(args![
                "key", "value", "AnotherKey", false, "four", 123123,
                map(json!({"MORETEST": 123123, "TestAgain": false})), "more", 123123
            ])),
            json!({
                "key": "value", "AnotherKey": false, "four": 123123,
                "MORETEST": 123123, "TestAgain": false,
                "more": "", "miscFields": 123123
            })
        );
    }

    #[test]
    fn error_style_arguments() {
        assert_eq!(
            as_json(normalize(args![1, 2, 3, "masdasd"])),
            json!({"1": 2, "3": "masdasd"})
        );
    }
}
