//! Handler implementations

pub mod discard;
pub mod json;
pub mod minimal_shell;
pub mod shell;
pub mod text;

pub use discard::DiscardHandler;
pub use json::JsonHandler;
pub use minimal_shell::MinimalShellHandler;
pub use shell::ShellHandler;
pub use text::TextHandler;

use crate::core::{Data, LoggerError, PlainValue, Result};
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::io::Write;

/// Append ` key: value` pairs in key order, optionally painting each `key:`.
pub(crate) fn push_fields(line: &mut String, data: &Data, key_paint: Option<&str>) {
    for (key, value) in data.iter() {
        // Writing into a String cannot fail.
        let _ = match key_paint {
            Some(start) => write!(
                line,
                " {}{}:{} {}",
                start,
                key,
                shell::RESET,
                PlainValue(value)
            ),
            None => write!(line, " {}: {}", key, PlainValue(value)),
        };
    }
}

/// Write one preformatted line while holding the destination lock.
pub(crate) fn write_line<W: Write>(writer: &Mutex<W>, line: &str, operation: &str) -> Result<()> {
    let mut writer = writer.lock();
    writer
        .write_all(line.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| LoggerError::io_operation(operation, e))
}
