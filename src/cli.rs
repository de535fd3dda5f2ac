//! Command-line edge: turns shell words into [`RawArgument`]s.
//!
//! A word that parses as JSON is taken for what it is (`42`, `true`, `1.5`,
//! `{"a":1}`, `"quoted"`); anything else is a literal string.

use slogger_core::RawArgument;

pub fn parse_argument(word: &str) -> RawArgument {
    match serde_json::from_str::<serde_json::Value>(word) {
        Ok(value) => RawArgument::from(value),
        Err(_) => RawArgument::from(word),
    }
}

pub fn parse_arguments<S: AsRef<str>>(words: &[S]) -> Vec<RawArgument> {
    words.iter().map(|w| parse_argument(w.as_ref())).collect()
}
