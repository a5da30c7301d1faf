//! Colored handler for POSIX shells

use super::{push_fields, write_line};
use crate::core::{local_clock, Entry, Handler, Result};
use colored::Color;
use parking_lot::Mutex;
use std::io::Write;

pub(crate) const RESET: &str = "\x1b[0m";

const CLOCK_COLOR: Color = Color::Black;
pub(crate) const MESSAGE_COLOR: Color = Color::White;

/// Bold foreground escape for `color`, e.g. `ESC[1;31m` for red
pub(crate) fn paint(color: Color) -> String {
    format!("\x1b[1;{}m", color.to_fg_str())
}

/// Text handler with the level token and data keys colored by level.
///
/// Escapes are written unconditionally, whatever the destination is.
pub struct ShellHandler<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> ShellHandler<W> {
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
            "{}{}{} {}{} {}{}{}",
            level_paint,
            entry.level,
            RESET,
            paint(CLOCK_COLOR),
            local_clock(&entry.time),
            paint(MESSAGE_COLOR),
            entry.message,
            RESET
        );
        push_fields(&mut line, &entry.data, Some(&level_paint));
        line.push('\n');
        line
    }
}

impl<W: Write + Send> Handler for ShellHandler<W> {
    fn log(&self, entry: Entry) -> Result<()> {
        let line = Self::format(&entry);
        write_line(&self.writer, &line, "writing shell record")
    }

    fn name(&self) -> &str {
        "shell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Data, Level};

    #[test]
    fn test_paint() {
        assert_eq!(paint(Color::Red), "\x1b[1;31m");
        assert_eq!(paint(Level::Debug.color()), "\x1b[1;30m");
    }

    #[test]
    fn test_colored_line() {
        let handler = ShellHandler::new(Vec::new());
        let entry = Entry::new(Level::Warn, "slow", Some(Data::new().with("ms", 1500)));
        let clock = local_clock(&entry.time);
        handler.log(entry).unwrap();

        let out = String::from_utf8(handler.into_inner()).unwrap();
        assert_eq!(
            out,
            format!(
                "\x1b[1;33mWRN\x1b[0m \x1b[1;30m{} \x1b[1;37mslow\x1b[0m \x1b[1;33mms:\x1b[0m 1500\n",
                clock
            )
        );
    }

    #[test]
    fn test_level_colors() {
        for (level, code) in [
            (Level::Debug, "30"),
            (Level::Error, "31"),
            (Level::Warn, "33"),
            (Level::Info, "34"),
        ] {
            let handler = ShellHandler::new(Vec::new());
            handler.log(Entry::new(level, "m", None)).unwrap();
            let out = String::from_utf8(handler.into_inner()).unwrap();
            assert!(out.starts_with(&format!("\x1b[1;{}m{}\x1b[0m ", code, level)));
        }
    }
}
