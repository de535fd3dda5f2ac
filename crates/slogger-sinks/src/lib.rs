//! slogger-sinks: log sink adapters for slogger.
//!
//! Each sink implements [`slogger_core::Backend`]: it receives finished
//! [`Record`](slogger_core::Record)s from a [`Logger`] and writes them
//! somewhere. [`from_config`] picks one from the `[sink]` config section.

pub mod channel;
pub mod json;
pub mod tracing_bridge;

pub use channel::ChannelBackend;
pub use json::JsonBackend;
pub use tracing_bridge::TracingBackend;

use slogger_core::config::{Config, SinkConfig, SinkKind};
use slogger_core::{Backend, Logger, SinkError};

/// Open the sink described by `config`.
pub fn from_config(config: &SinkConfig) -> Result<Box<dyn Backend>, SinkError> {
    let backend: Box<dyn Backend> = match config.kind {
        SinkKind::Stdout => Box::new(JsonBackend::stdout()),
        SinkKind::Stderr => Box::new(JsonBackend::stderr()),
        SinkKind::File => Box::new(JsonBackend::file(&config.path, config.append)?),
    };
    tracing::debug!(kind = ?config.kind, path = %config.path.display(), "log sink ready");
    Ok(backend)
}

/// Build a [`Logger`] from a full configuration.
pub fn logger_from_config(config: &Config) -> Result<Logger<Box<dyn Backend>>, SinkError> {
    Ok(Logger::new(from_config(&config.sink)?).with_timestamps(config.record.timestamps))
}
