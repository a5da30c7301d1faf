//! Core logger types and traits

pub mod error;
pub mod handler;
pub mod log_data;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use handler::Handler;
pub use log_data::{Data, PlainValue};
pub use log_entry::Entry;
pub use log_level::Level;
pub use logger::Logger;
pub use timestamp::{local_clock, CLOCK_FORMAT};
