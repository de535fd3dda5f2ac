//! Tracing bridge: forwards records into the `tracing` ecosystem.
//!
//! Useful when an application already installs a `tracing` subscriber and
//! wants slogger call sites to land in the same output. Attributes are
//! rendered as one JSON object in the `attrs` field because `tracing` field
//! names must be known at compile time.

use slogger_core::{Attr, Backend, Level, Record, SinkError};

/// Target every bridged event is emitted under.
pub const TARGET: &str = "slogger";

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    pub fn new() -> Self {
        Self
    }
}

macro_rules! bridge_event {
    ($macro:ident, $record:expr, $attrs:expr) => {
        tracing::$macro!(
            target: TARGET,
            err = $record.error.as_deref(),
            attrs = $attrs.as_deref(),
            "{}",
            $record.message
        )
    };
}

impl Backend for TracingBackend {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        let attrs = record.attrs.as_deref().map(render_attrs).transpose()?;
        match record.level {
            Level::Debug => bridge_event!(debug, record, attrs),
            Level::Info => bridge_event!(info, record, attrs),
            Level::Warn => bridge_event!(warn, record, attrs),
            Level::Error => bridge_event!(error, record, attrs),
        }
        Ok(())
    }
}

fn render_attrs(attrs: &[Attr]) -> Result<String, SinkError> {
    let object: serde_json::Map<String, serde_json::Value> = attrs
        .iter()
        .map(|attr| (attr.key.clone(), attr.value.clone()))
        .collect();
    Ok(serde_json::to_string(&object)?)
}
