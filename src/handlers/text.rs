//! Plain text handler

use super::{push_fields, write_line};
use crate::core::{local_clock, Entry, Handler, Result};
use parking_lot::Mutex;
use std::io::Write;

/// Writes `LVL HH:MM:SS message key: value ...` lines, keys sorted.
pub struct TextHandler<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> TextHandler<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn format(entry: &Entry) -> String {
        let mut line = format!(
            "{} {} {}",
            entry.level,
            local_clock(&entry.time),
            entry.message
        );
        push_fields(&mut line, &entry.data, None);
        line.push('\n');
        line
    }
}

impl<W: Write + Send> Handler for TextHandler<W> {
    fn log(&self, entry: Entry) -> Result<()> {
        let line = Self::format(&entry);
        write_line(&self.writer, &line, "writing text record")
    }

    fn name(&self) -> &str {
        "text"
    }
}
