//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and call the matching
//! logger method without extra info. Each expands to the method's `Result`.
//!
//! # Examples
//!
//! ```
//! use bitnacle::prelude::*;
//! use bitnacle::info;
//!
//! let logger = Logger::new(LoggerOptions::default()).unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message at any level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use bitnacle::prelude::*;
/// # let logger = Logger::new(LoggerOptions::default()).unwrap();
/// use bitnacle::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, "AUDIT", "User {} signed in", 42).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), None)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use bitnacle::prelude::*;
/// # let logger = Logger::new(LoggerOptions::default()).unwrap();
/// use bitnacle::info;
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use bitnacle::prelude::*;
/// # let logger = Logger::new(LoggerOptions::default()).unwrap();
/// use bitnacle::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
