//! Logger: the call-site front-end.
//!
//! A [`Logger`] normalises the raw arguments of each call, wraps the result
//! in a [`Record`] and hands it to the backend it was constructed with. There
//! is no global logger; callers own one and pass it where it is needed.

use chrono::Utc;
use std::fmt;

use crate::backend::Backend;
use crate::normalizer::normalize;
use crate::record::Record;
use crate::types::{Level, RawArgument};

pub struct Logger<B> {
    backend: B,
    timestamps: bool,
}

impl<B: Backend> Logger<B> {
    /// Build a logger writing to `backend`, stamping records with the
    /// current UTC time.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            timestamps: true,
        }
    }

    /// Turn record timestamps on or off.
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Log an event at `level` with the given call-site arguments.
    pub fn log_event(&self, level: Level, message: &str, args: Vec<RawArgument>) {
        let record = self.record(level, message, args);
        self.emit(&record);
    }

    /// Log an event whose level arrives as a string.
    ///
    /// Only the exact strings `"debug"`, `"info"` and `"warn"` are
    /// recognised. Anything else, `"error"`, `"warning"` and any other
    /// spelling included, is ignored: errors go through [`Logger::log_error`].
    pub fn log_event_str(&self, kind: &str, message: &str, args: Vec<RawArgument>) {
        let level = match kind {
            "debug" => Level::Debug,
            "info" => Level::Info,
            "warn" => Level::Warn,
            _ => {
                tracing::debug!(kind, msg = message, "ignoring event with unsupported kind");
                return;
            }
        };
        self.log_event(level, message, args);
    }

    pub fn debug(&self, message: &str, args: Vec<RawArgument>) {
        self.log_event(Level::Debug, message, args);
    }

    pub fn info(&self, message: &str, args: Vec<RawArgument>) {
        self.log_event(Level::Info, message, args);
    }

    pub fn warn(&self, message: &str, args: Vec<RawArgument>) {
        self.log_event(Level::Warn, message, args);
    }

    pub fn error(&self, message: &str, args: Vec<RawArgument>) {
        self.log_event(Level::Error, message, args);
    }

    /// Log `err` at error level and hand it back untouched.
    ///
    /// ```
    /// # use slogger_core::{args, Logger, Record, SinkError, Backend};
    /// # struct Discard;
    /// # impl Backend for Discard {
    /// #     fn emit(&self, _: &Record) -> Result<(), SinkError> { Ok(()) }
    /// # }
    /// # let logger = Logger::new(Discard);
    /// fn connect(logger: &Logger<Discard>) -> Result<(), std::io::Error> {
    ///     let err = std::io::Error::other("refused");
    ///     Err(logger.log_error("connect failed", err, args!["port", 5432]))
    /// }
    /// assert!(connect(&logger).is_err());
    /// ```
    pub fn log_error<E: fmt::Display>(&self, message: &str, err: E, args: Vec<RawArgument>) -> E {
        let record = self
            .record(Level::Error, message, args)
            .with_error(err.to_string());
        self.emit(&record);
        err
    }

    fn record(&self, level: Level, message: &str, args: Vec<RawArgument>) -> Record {
        let record = Record::new(level, message).with_attrs(normalize(args).into_attrs());
        if self.timestamps {
            record.with_time(Utc::now())
        } else {
            record
        }
    }

    fn emit(&self, record: &Record) {
        if let Err(e) = self.backend.emit(record) {
            tracing::warn!(error = %e, level = %record.level, "dropping log record");
        }
    }
}

impl<B> fmt::Debug for Logger<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("timestamps", &self.timestamps)
            .finish_non_exhaustive()
    }
}
