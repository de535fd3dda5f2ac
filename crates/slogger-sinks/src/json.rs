//! JSON lines sink: one JSON object per record over any [`io::Write`].

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use slogger_core::{Backend, Record, SinkError};

/// Writes each record as a single JSON line.
///
/// The record is serialised in full before the writer lock is taken and then
/// written with one `write_all`, so lines from concurrent emitters never
/// interleave.
pub struct JsonBackend<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonBackend<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect an in-memory buffer.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer.into_inner().map_err(|_| SinkError::Poisoned)
    }
}

impl JsonBackend<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl JsonBackend<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl JsonBackend<File> {
    /// Open (creating if needed) `path`. With `append` false an existing file
    /// is truncated.
    pub fn file(path: &Path, append: bool) -> Result<Self, SinkError> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(path).map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> Backend for JsonBackend<W> {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut writer = self.writer.lock().map_err(|_| SinkError::Poisoned)?;
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}
