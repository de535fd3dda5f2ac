//! The write capability the [`Logger`](crate::Logger) is built on.

use std::sync::Arc;

use crate::error::SinkError;
use crate::record::Record;

/// Trait implemented by each log sink.
///
/// Implementations own whatever serialisation discipline their destination
/// needs; `emit` may be called from many threads at once.
pub trait Backend: Send + Sync {
    /// Write one record. A single attempt, no retries.
    fn emit(&self, record: &Record) -> Result<(), SinkError>;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        (**self).emit(record)
    }
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        (**self).emit(record)
    }
}

impl<B: Backend + ?Sized> Backend for &B {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        (**self).emit(record)
    }
}
