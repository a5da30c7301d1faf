//! Shared helpers for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// In-memory destination that stays readable after being moved into a handler
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.inner.lock().clone()).expect("log output is UTF-8")
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Destination whose writes always fail, like a closed pipe
#[derive(Clone, Default)]
pub struct ClosedWriter {
    attempts: Arc<Mutex<usize>>,
}

impl ClosedWriter {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }
}

impl Write for ClosedWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        *self.attempts.lock() += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "destination closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Whether `s` looks like a `HH:MM:SS` clock reading
pub fn is_clock(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 8
        && bytes[2] == b':'
        && bytes[5] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
}
