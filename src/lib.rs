//! # Bitnacle
//!
//! A minimal structured logging facade.
//!
//! ## Features
//!
//! - **Two Formats**: bracketed `simple` text lines or `json` objects
//! - **Request Metadata**: method, endpoint, remote address and id pulled from
//!   request-like objects
//! - **Severity Routing**: ERROR lines go to stderr, everything else to stdout
//! - **Extra Sinks**: every line is copied to any number of caller-owned sinks
//!
//! ## Example
//!
//! ```
//! use bitnacle::prelude::*;
//! use serde_json::json;
//!
//! let logger = Logger::new(LoggerOptions::new().with_format("json")).unwrap();
//! logger
//!     .info(
//!         "Request handled",
//!         Some(&json!({
//!             "req": {"method": "GET", "originalUrl": "/users", "ip": "127.0.0.1"},
//!             "extra": {"status": 200},
//!         })),
//!     )
//!     .unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleSink, FileSink, MemorySink};
    pub use crate::core::{
        Channel, FixedClock, FormatRegistry, Level, LogLevel, LogRecord, Logger, LoggerBuilder,
        LoggerError, LoggerOptions, Message, Renderer, RequestInfo, Result, Sink, SystemClock,
        TimeSource,
    };
}

pub use appenders::{ConsoleSink, FileSink, MemorySink};
pub use core::{
    extract, extract_request, init, Channel, FixedClock, FormatRegistry, JsonRenderer, Level,
    LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerOptions, Message, Renderer,
    RequestInfo, Result, SimpleRenderer, Sink, SystemClock, TimeSource,
};
