//! Minimal colored handler: a bullet and the message, nothing else

use super::shell::{paint, MESSAGE_COLOR, RESET};
use super::{push_fields, write_line};
use crate::core::{Entry, Handler, Result};
use parking_lot::Mutex;
use std::io::Write;

const BULLET: char = '•';

/// Shell handler without timestamps or level tokens.
///
/// The level only shows through the color of the bullet and the data keys.
pub struct MinimalShellHandler<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> MinimalShellHandler<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn format(entry: &Entry) -> String {
        let level_paint = paint(entry.level.color());
        let mut line = format!(
            "{}{}{} {}{}{}",
            level_paint,
            BULLET,
            RESET,
            paint(MESSAGE_COLOR),
            entry.message,
            RESET
        );
        push_fields(&mut line, &entry.data, Some(&level_paint));
        line.push('\n');
        line
    }
}

impl<W: Write + Send> Handler for MinimalShellHandler<W> {
    fn log(&self, entry: Entry) -> Result<()> {
        let line = Self::format(&entry);
        write_line(&self.writer, &line, "writing minimal shell record")
    }

    fn name(&self) -> &str {
        "minimal-shell"
    }
}
