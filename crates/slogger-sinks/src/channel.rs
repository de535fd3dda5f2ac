//! Channel sink: hands records to an async consumer over a tokio channel.

use tokio::sync::mpsc;

use slogger_core::{Backend, Record, SinkError};

/// Sends a clone of every record down an unbounded channel.
///
/// Emission never blocks. Once the receiver is dropped every emit fails with
/// [`SinkError::Closed`].
#[derive(Debug, Clone)]
pub struct ChannelBackend {
    tx: mpsc::UnboundedSender<Record>,
}

impl ChannelBackend {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Record>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Backend for ChannelBackend {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        self.tx.send(record.clone()).map_err(|_| SinkError::Closed)
    }
}
