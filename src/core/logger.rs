//! Main logger implementation

use super::{
    error::LoggerError, handler::Handler, log_data::Data, log_entry::Entry, log_level::Level,
};
use crate::handlers::{
    DiscardHandler, JsonHandler, MinimalShellHandler, ShellHandler, TextHandler,
};
use std::io::{self, Write};
use std::sync::Arc;

/// Report a handler failure on the fallback stream.
///
/// Best effort: a failure to write the report itself is ignored.
fn report(out: &mut impl Write, name: &str, err: &LoggerError) {
    let _ = writeln!(out, "[LOGGER ERROR] Handler '{}' failed: {}", name, err);
}

/// Front end that builds entries and hands them to a single handler.
///
/// Logging never fails from the caller's point of view: a handler error is
/// reported on standard error and the entry is lost.
///
/// # Example
///
/// ```
/// use leveled_logger::{data, Level, Logger};
///
/// let logger = Logger::text(std::io::stdout());
/// logger.log(Level::Warn, Some(data! { "free_mb" => 512 }), "disk space low");
/// ```
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Create a logger sharing an existing handler
    pub fn from_shared(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    /// JSON logger, recommended for production.
    ///
    /// `INF` entries are dropped since they are purely informational,
    /// machine-actionable events. `DBG` entries are written only when
    /// `debug` is true.
    pub fn json<W: Write + Send + 'static>(writer: W, debug: bool) -> Self {
        Self::new(JsonHandler::new(writer, debug))
    }

    /// Plain text logger
    pub fn text<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new(TextHandler::new(writer))
    }

    /// Text logger with POSIX shell colors
    pub fn shell<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new(ShellHandler::new(writer))
    }

    /// Shell colored logger without timestamps or level tokens
    pub fn minimal_shell<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new(MinimalShellHandler::new(writer))
    }

    /// Logger that drops every entry
    pub fn discard() -> Self {
        Self::new(DiscardHandler)
    }

    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    pub fn log(&self, level: Level, data: Option<Data>, message: impl Into<String>) {
        let entry = Entry::new(level, message, data);
        if let Err(e) = self.handler.log(entry) {
            report(&mut io::stderr().lock(), self.handler.name(), &e);
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, None, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, None, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, None, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, None, message);
    }

    pub fn debug_with_data(&self, message: impl Into<String>, data: Data) {
        self.log(Level::Debug, Some(data), message);
    }

    pub fn info_with_data(&self, message: impl Into<String>, data: Data) {
        self.log(Level::Info, Some(data), message);
    }

    pub fn warn_with_data(&self, message: impl Into<String>, data: Data) {
        self.log(Level::Warn, Some(data), message);
    }

    pub fn error_with_data(&self, message: impl Into<String>, data: Data) {
        self.log(Level::Error, Some(data), message);
    }
}
