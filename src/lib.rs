//! slogger: structured JSON logging with variadic argument normalisation.
//!
//! Call sites pass a loose list of arguments (key/value pairs, bare scalars,
//! embedded maps, in any order). Those are normalised into one flat attribute
//! set and written as a single JSON record per call.
//!
//! # Architecture
//!
//! ```text
//! args ──► normalize ──► Logger ──► Backend (JSON writer / channel / tracing)
//! ```
//!
//! This crate re-exports the two workspace libraries and adds the
//! command-line edge used by the `slogger` binary.

pub mod cli;

pub use slogger_core::{
    args, config, normalize, AttributeSet, Backend, Level, Logger, RawArgument, Record,
    SinkError, MISC_FIELDS_KEY,
};
pub use slogger_sinks::{
    from_config, logger_from_config, ChannelBackend, JsonBackend, TracingBackend,
};
