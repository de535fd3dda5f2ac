//! Core types for slogger-core.
//!
//! This module defines the data structures shared across the normalizer, the
//! logger front-end and the sinks: the call-site [`RawArgument`], the
//! normalised [`AttributeSet`] with its [`Attr`] entries, and the [`Level`]
//! discriminant.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::error::ParseLevelError;

/// Key used to retain an unpaired trailing scalar argument.
pub const MISC_FIELDS_KEY: &str = "miscFields";

// ---------------------------------------------------------------------------
// RawArgument
// ---------------------------------------------------------------------------

/// One element supplied at a logging call site.
///
/// Call sites hand over arbitrary values; the `From` impls below decide once,
/// at the edge, which variant a value belongs to. The normalizer only ever
/// matches on the variant tag.
#[derive(Debug, Clone, PartialEq)]
pub enum RawArgument {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
    /// An embedded mapping whose entries are merged into the attribute set.
    Map(BTreeMap<String, Value>),
    /// Anything else: `null`, arrays, integers outside the `i64` range.
    Other(Value),
}

impl RawArgument {
    /// Render this argument as an attribute key.
    ///
    /// Strings are used as-is, integers in base 10 and booleans as
    /// `"true"`/`"false"`. Every other variant has no key form and yields
    /// `None`; the caller drops the pair.
    pub fn as_key(&self) -> Option<String> {
        match self {
            RawArgument::String(s) => Some(s.clone()),
            RawArgument::Int(i) => Some(i.to_string()),
            RawArgument::Bool(b) => Some(b.to_string()),
            RawArgument::Float(_) | RawArgument::Map(_) | RawArgument::Other(_) => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, RawArgument::Map(_))
    }

    /// Convert into the value stored in an [`AttributeSet`].
    pub fn into_value(self) -> Value {
        match self {
            RawArgument::String(s) => Value::String(s),
            RawArgument::Int(i) => Value::from(i),
            RawArgument::Bool(b) => Value::Bool(b),
            // Non-finite floats have no JSON form.
            RawArgument::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            RawArgument::Map(map) => Value::Object(map.into_iter().collect()),
            RawArgument::Other(v) => v,
        }
    }
}

impl From<&str> for RawArgument {
    fn from(value: &str) -> Self {
        RawArgument::String(value.to_string())
    }
}

impl From<String> for RawArgument {
    fn from(value: String) -> Self {
        RawArgument::String(value)
    }
}

impl From<&String> for RawArgument {
    fn from(value: &String) -> Self {
        RawArgument::String(value.clone())
    }
}

impl From<bool> for RawArgument {
    fn from(value: bool) -> Self {
        RawArgument::Bool(value)
    }
}

macro_rules! impl_from_lossless_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawArgument {
                fn from(value: $ty) -> Self {
                    RawArgument::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawArgument {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(i) => RawArgument::Int(i),
                        Err(_) => RawArgument::Other(Value::from(value)),
                    }
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize);

impl From<f32> for RawArgument {
    fn from(value: f32) -> Self {
        RawArgument::Float(f64::from(value))
    }
}

impl From<f64> for RawArgument {
    fn from(value: f64) -> Self {
        RawArgument::Float(value)
    }
}

impl From<Value> for RawArgument {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => RawArgument::String(s),
            Value::Bool(b) => RawArgument::Bool(b),
            Value::Object(map) => RawArgument::Map(map.into_iter().collect()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawArgument::Int(i)
                } else if n.is_f64() {
                    n.as_f64()
                        .map(RawArgument::Float)
                        .unwrap_or(RawArgument::Other(Value::Number(n)))
                } else {
                    RawArgument::Other(Value::Number(n))
                }
            }
            other @ (Value::Null | Value::Array(_)) => RawArgument::Other(other),
        }
    }
}

impl From<serde_json::Map<String, Value>> for RawArgument {
    fn from(value: serde_json::Map<String, Value>) -> Self {
        RawArgument::Map(value.into_iter().collect())
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for RawArgument {
    fn from(value: BTreeMap<String, V>) -> Self {
        RawArgument::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<Value>> From<HashMap<String, V>> for RawArgument {
    fn from(value: HashMap<String, V>) -> Self {
        RawArgument::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<RawArgument>> From<Option<T>> for RawArgument {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawArgument::Other(Value::Null))
    }
}

// ---------------------------------------------------------------------------
// AttributeSet
// ---------------------------------------------------------------------------

/// Flat mapping from string key to value, built fresh for one logging call.
///
/// Keys are unique and later writes win. Iteration is ordered by key so the
/// serialised record is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet(BTreeMap<String, Value>);

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Insert or overwrite a single entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Copy every entry of `source` into the set, overwriting shared keys.
    pub fn merge(&mut self, source: BTreeMap<String, Value>) {
        self.0.extend(source);
    }

    /// Convert into the backend attribute list.
    ///
    /// An empty set yields `None` rather than an empty list, so backends emit
    /// no attribute keys at all.
    pub fn into_attrs(self) -> Option<Vec<Attr>> {
        if self.0.is_empty() {
            return None;
        }
        Some(
            self.0
                .into_iter()
                .map(|(key, value)| Attr { key, value })
                .collect(),
        )
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

/// One labelled value as handed to a backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Log severity level of an emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
