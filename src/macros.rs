//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` before the entry
//! reaches the handler. Keyed data goes in an optional leading
//! `data: <expr>,` argument.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{data, warn};
//!
//! let logger = Logger::discard();
//!
//! warn!(logger, "Server started");
//!
//! let port = 8080;
//! warn!(logger, "Server listening on port {}", port);
//!
//! warn!(logger, data: data! { "port" => port }, "Port {} is privileged", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::discard();
/// use leveled_logger::{data, log};
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// log!(logger, Level::Error, data: data! { "code" => 500 }, "Request failed");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, data: $data:expr, $($arg:tt)+) => {
        $logger.log($level, ::std::option::Option::Some($data), format!($($arg)+))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::std::option::Option::None, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::discard();
/// use leveled_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an informational message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::discard();
/// use leveled_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::discard();
/// use leveled_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::discard();
/// use leveled_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Data, Entry, Handler, Level, Logger, Result};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Entry>>);

    impl Handler for Recorder {
        fn log(&self, entry: Entry) -> Result<()> {
            self.0.lock().push(entry);
            Ok(())
        }

        fn name(&self) -> &str {
            "recorder"
        }
    }

    fn recording_logger() -> (Logger, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        (Logger::from_shared(recorder.clone()), recorder)
    }

    #[test]
    fn test_log_macro() {
        let (logger, recorder) = recording_logger();
        log!(logger, Level::Warn, "Test message");
        log!(logger, Level::Warn, "Formatted: {}", 42);

        let entries = recorder.0.lock();
        assert_eq!(entries[0].message, "Test message");
        assert_eq!(entries[1].message, "Formatted: 42");
        assert!(entries[1].data.is_empty());
    }

    #[test]
    fn test_log_macro_with_data() {
        let (logger, recorder) = recording_logger();
        log!(logger, Level::Error, data: Data::new().with("code", 500), "Code: {}", 500);

        let entries = recorder.0.lock();
        assert_eq!(entries[0].message, "Code: 500");
        assert_eq!(entries[0].data.keys(), vec!["code"]);
    }

    #[test]
    fn test_level_macros() {
        let (logger, recorder) = recording_logger();
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, data: crate::data! { "code" => 500 }, "Code: {}", 500);

        let entries = recorder.0.lock();
        let levels: Vec<Level> = entries.iter().map(|e| e.level).collect();
        assert_eq!(levels, Level::ALL.to_vec());
        assert_eq!(entries[2].message, "Retry 1 of 3");
        assert_eq!(entries[3].data.len(), 1);
    }
}
