//! Error types shared by the core and the sink crate.

use std::path::PathBuf;

/// Failure while handing a record to a sink.
///
/// These never reach a logging call site: [`Logger`](crate::Logger) reports
/// them through its own diagnostics and carries on.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write log record: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialise log record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("log writer lock poisoned by a panicking thread")]
    Poisoned,
    #[error("log sink is closed")]
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0:?} (expected debug, info, warn or error)")]
pub struct ParseLevelError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sink kind: {0:?} (expected stdout, stderr or file)")]
pub struct ParseSinkKindError(pub String);
