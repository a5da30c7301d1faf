//! # Leveled Logger
//!
//! A small structured logging library. A [`Logger`] builds an [`Entry`] from a
//! level, a message and optional keyed [`Data`], then hands it to exactly one
//! [`Handler`].
//!
//! ## Handlers
//!
//! - **JSON**: one JSON object per line; `INF` dropped, `DBG` opt-in
//! - **Text**: `LVL HH:MM:SS message key: value`
//! - **Shell**: the text layout with ANSI colors
//! - **Minimal shell**: a colored bullet and the message
//! - **Discard**: writes nothing
//!
//! Handler write failures never reach the caller; they are reported on
//! standard error instead.

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{Data, Entry, Handler, Level, Logger, LoggerError, Result};
    pub use crate::handlers::{
        DiscardHandler, JsonHandler, MinimalShellHandler, ShellHandler, TextHandler,
    };
}

pub use crate::core::{Data, Entry, Handler, Level, Logger, LoggerError, Result};
pub use crate::handlers::{DiscardHandler, JsonHandler, MinimalShellHandler, ShellHandler, TextHandler};
