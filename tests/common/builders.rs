//! Test builders: in-memory sinks and loggers wired to them.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use serde_json::Value;
use slogger::{JsonBackend, Logger};
use std::io::Write;
use std::sync::{Arc, Mutex};

// ---------------------------------------------------------------------------
// SharedBuf
// ---------------------------------------------------------------------------

/// A cloneable in-memory writer. Every clone appends to the same buffer.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("log output must be UTF-8")
    }

    /// Parse every line written so far as a JSON object.
    pub fn records(&self) -> Vec<Value> {
        self.contents()
            .lines()
            .map(|line| serde_json::from_str(line).expect("every line must be valid JSON"))
            .collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Logger builders
// ---------------------------------------------------------------------------

/// A JSON logger writing into a fresh [`SharedBuf`], timestamps off so output
/// is byte-for-byte stable.
pub fn buffer_logger() -> (Logger<JsonBackend<SharedBuf>>, SharedBuf) {
    let buf = SharedBuf::new();
    let logger = Logger::new(JsonBackend::new(buf.clone())).with_timestamps(false);
    (logger, buf)
}

/// Same as [`buffer_logger`] but stamping records with the current time.
pub fn timestamped_buffer_logger() -> (Logger<JsonBackend<SharedBuf>>, SharedBuf) {
    let buf = SharedBuf::new();
    let logger = Logger::new(JsonBackend::new(buf.clone()));
    (logger, buf)
}
