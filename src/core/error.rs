//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level token that is not one of DBG, INF, WRN or ERR
    #[error("invalid level: '{0}'")]
    InvalidLevel(String),

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Create an invalid level error for the given input
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(input.into())
    }

    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Whether this error came from a failed write to a destination
    pub fn is_io(&self) -> bool {
        matches!(self, LoggerError::IoOperation { .. })
    }
}
