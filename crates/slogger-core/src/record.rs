//! The record handed to a [`Backend`](crate::Backend) for every logging call.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::{Attr, Level};

/// One log record: level, message, optional error text and the normalised
/// attributes.
///
/// `attrs` is `None` when the call produced an empty attribute set, which
/// keeps the serialised record free of any attribute keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub time: Option<DateTime<Utc>>,
    pub level: Level,
    pub message: String,
    pub error: Option<String>,
    pub attrs: Option<Vec<Attr>>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: None,
            level,
            message: message.into(),
            error: None,
            attrs: None,
        }
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_attrs(mut self, attrs: Option<Vec<Attr>>) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn attr_count(&self) -> usize {
        self.attrs.as_ref().map_or(0, Vec::len)
    }
}

/// Flat JSON object: `time`, `level`, `msg`, `err`, then one key per
/// attribute in the order the attribute list carries them.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(time) = &self.time {
            map.serialize_entry("time", &time.to_rfc3339_opts(SecondsFormat::Millis, true))?;
        }
        map.serialize_entry("level", &self.level)?;
        map.serialize_entry("msg", &self.message)?;
        if let Some(error) = &self.error {
            map.serialize_entry("err", error)?;
        }
        for attr in self.attrs.iter().flatten() {
            map.serialize_entry(&attr.key, &attr.value)?;
        }
        map.end()
    }
}
