//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Requested output format is not registered (or is reserved)
    #[error("Invalid format '{format}', use one of the following: {}", .choices.join(", "))]
    InvalidFormat { format: String, choices: Vec<String> },

    /// A configured stream failed the writable capability check
    #[error("stream[{index}] is not a writable stream")]
    NonWritableStream { index: usize },

    /// Caller supplied malformed log input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unrecognized severity label
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Channel or sink write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid format error listing the valid choices
    pub fn invalid_format<I, S>(format: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LoggerError::InvalidFormat {
            format: format.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a non-writable stream error for the stream at `index`
    pub fn non_writable_stream(index: usize) -> Self {
        LoggerError::NonWritableStream { index }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        LoggerError::Validation(msg.into())
    }

    /// Whether this error was raised while constructing a logger
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidFormat { .. } | LoggerError::NonWritableStream { .. }
        )
    }

    /// Whether this error was raised while validating a log call
    pub fn is_validation(&self) -> bool {
        matches!(self, LoggerError::Validation(_))
    }
}
