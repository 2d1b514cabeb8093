//! Core logger types and traits

pub mod bridge;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod output_format;
pub mod request;
pub mod sink;
pub mod timestamp;

pub use bridge::init;
pub use error::{LoggerError, Result};
pub use log_level::{Channel, Level, LogLevel};
pub use log_record::{LogRecord, Message};
pub use logger::{Logger, LoggerBuilder, LoggerOptions};
pub use output_format::{FormatRegistry, JsonRenderer, Renderer, SimpleRenderer};
pub use request::{extract, extract_request, RequestInfo};
pub use sink::Sink;
pub use timestamp::{FixedClock, SystemClock, TimeSource};
