//! slogger-core: argument normalisation and the logger front-end.
//!
//! A logging call hands over a loosely-typed list of arguments. The
//! normalizer folds them into one flat [`AttributeSet`], the [`Logger`]
//! wraps that in a [`Record`], and a [`Backend`] writes it.
//!
//! # Architecture
//!
//! ```text
//! call site ──► RawArgument ──► normalize ──► AttributeSet
//!                                                  │
//! Logger::log_event / log_error ──► Record ──► Backend::emit
//! ```
//!
//! The normalizer is pure; the only shared state lives in the backend.

pub mod backend;
pub mod config;
pub mod error;
pub mod logger;
pub mod normalizer;
pub mod record;
pub mod types;

pub use backend::Backend;
pub use error::{ParseLevelError, ParseSinkKindError, SinkError};
pub use logger::Logger;
pub use normalizer::normalize;
pub use record::Record;
pub use types::{Attr, AttributeSet, Level, RawArgument, MISC_FIELDS_KEY};

/// Build a `Vec<RawArgument>` from heterogeneous expressions.
///
/// ```
/// use slogger_core::{args, normalize};
///
/// let attrs = normalize(args!["user", "alice", "attempt", 3, true]);
/// assert_eq!(attrs.get("attempt"), Some(&serde_json::json!(3)));
/// assert_eq!(attrs.get("miscFields"), Some(&serde_json::json!(true)));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::RawArgument>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::RawArgument::from($arg)),+]
    };
}
