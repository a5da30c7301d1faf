//! JSON handler for structured logging

use crate::core::{Entry, Handler, Level, LoggerError, Result};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes each entry as a single-line JSON object (JSONL format).
///
/// `INF` entries are always suppressed; `DBG` entries only pass when the
/// handler was built with `debug` enabled.
pub struct JsonHandler<W: Write + Send> {
    writer: Mutex<W>,
    debug: bool,
}

impl<W: Write + Send> JsonHandler<W> {
    pub fn new(writer: W, debug: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            debug,
        }
    }

    /// Recover the destination
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn suppresses(&self, level: Level) -> bool {
        match level {
            Level::Info => true,
            Level::Debug => !self.debug,
            Level::Warn | Level::Error => false,
        }
    }
}

impl<W: Write + Send> Handler for JsonHandler<W> {
    fn log(&self, entry: Entry) -> Result<()> {
        if self.suppresses(entry.level) {
            return Ok(());
        }

        let mut writer = self.writer.lock();
        serde_json::to_writer(&mut *writer, &entry)
            .map_err(io::Error::from)
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush())
            .map_err(|e| LoggerError::io_operation("writing JSON record", e))
    }

    fn name(&self) -> &str {
        "json"
    }
}
