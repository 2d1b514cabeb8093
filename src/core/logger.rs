//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    log_level::{Channel, Level, LogLevel},
    log_record::{is_truthy, LogRecord, Message},
    output_format::{FormatRegistry, Renderer, DEFAULT_FORMAT},
    request,
    sink::Sink,
    timestamp::{SystemClock, TimeSource},
};
use crate::appenders::ConsoleSink;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Construction options for [`Logger::new`]
#[derive(Clone, Default)]
pub struct LoggerOptions {
    /// Output format name, `simple` when omitted
    pub format: Option<String>,
    /// Extra sinks that receive every rendered line
    pub streams: Option<Vec<Arc<dyn Sink>>>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_streams(mut self, streams: Vec<Arc<dyn Sink>>) -> Self {
        self.streams = Some(streams);
        self
    }
}

/// Synchronous logging facade
///
/// Each call validates its input, renders one line and writes it to either the
/// standard or the error channel (only ERROR goes to the error channel), then
/// to every configured sink in order. Format and sinks are fixed at
/// construction.
pub struct Logger {
    format: String,
    renderer: Arc<dyn Renderer>,
    sinks: Vec<Arc<dyn Sink>>,
    stdout: Arc<dyn Sink>,
    stderr: Arc<dyn Sink>,
    clock: Arc<dyn TimeSource>,
}

impl Logger {
    /// Create a logger from plain options
    ///
    /// # Errors
    ///
    /// Fails with [`LoggerError::InvalidFormat`] for an unknown or reserved
    /// format and [`LoggerError::NonWritableStream`] for a stream failing the
    /// writable check.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(format) = options.format {
            builder = builder.format(format);
        }
        if let Some(streams) = options.streams {
            builder = builder.streams(streams);
        }
        builder.build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use bitnacle::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let audit = Arc::new(MemorySink::new());
    /// let logger = Logger::builder()
    ///     .format("json")
    ///     .stream(audit.clone())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.format(), "json");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn sinks(&self) -> &[Arc<dyn Sink>] {
        &self.sinks
    }

    /// Build the record for a call and render it, without the trailing newline
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Validation`] when `extra_info` is not an object or
    /// its `req` is not an object.
    pub fn render(
        &self,
        level: impl Into<Level>,
        message: impl Into<Message>,
        extra_info: Option<&Value>,
    ) -> Result<String> {
        let record = self.record(level.into(), message.into(), extra_info)?;
        self.renderer.render(&record)
    }

    fn record(&self, level: Level, message: Message, extra_info: Option<&Value>) -> Result<LogRecord> {
        let extra_info = extra_info.filter(|info| !info.is_null());
        if let Some(info) = extra_info {
            if !info.is_object() {
                return Err(LoggerError::validation("extraInfo must be an object"));
            }
        }

        let req = request::extract(extra_info)?;
        let extra = extra_info
            .and_then(|info| info.get("extra"))
            .filter(|extra| is_truthy(extra))
            .cloned();

        Ok(LogRecord::new(self.clock.now(), level, message)
            .with_request(req)
            .with_extra(extra))
    }

    /// Generic entry point
    ///
    /// # Errors
    ///
    /// Validation failures are returned before anything is written. Write
    /// failures from the channel or a sink are returned as they happen.
    pub fn log(
        &self,
        level: impl Into<Level>,
        message: impl Into<Message>,
        extra_info: Option<&Value>,
    ) -> Result<()> {
        let level = level.into();
        let channel = level.channel();

        let mut line = self.render(level, message, extra_info)?;
        line.push('\n');

        match channel {
            Channel::Error => self.stderr.write(&line)?,
            Channel::Standard => self.stdout.write(&line)?,
        }

        for sink in &self.sinks {
            sink.write(&line)?;
        }

        Ok(())
    }

    /// Log an error; pass `Message::from_error(&err)` to log an error value
    #[inline]
    pub fn error(&self, err: impl Into<Message>, extra_info: Option<&Value>) -> Result<()> {
        self.log(LogLevel::Error, err, extra_info)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<Message>, extra_info: Option<&Value>) -> Result<()> {
        self.log(LogLevel::Warning, message, extra_info)
    }

    #[inline]
    pub fn info(&self, message: impl Into<Message>, extra_info: Option<&Value>) -> Result<()> {
        self.log(LogLevel::Info, message, extra_info)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<Message>, extra_info: Option<&Value>) -> Result<()> {
        self.log(LogLevel::Debug, message, extra_info)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("format", &self.format)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use bitnacle::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .format("simple")
///     .stdout(Arc::new(MemorySink::new()))
///     .stderr(Arc::new(MemorySink::new()))
///     .clock(Arc::new(FixedClock::new("2025-01-08T10:30:45:123+0000")))
///     .build()
///     .unwrap();
/// logger.info("ready", None).unwrap();
/// ```
pub struct LoggerBuilder {
    format: String,
    registry: FormatRegistry,
    streams: Vec<Arc<dyn Sink>>,
    stdout: Arc<dyn Sink>,
    stderr: Arc<dyn Sink>,
    clock: Arc<dyn TimeSource>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            registry: FormatRegistry::new(),
            streams: Vec::new(),
            stdout: Arc::new(ConsoleSink::stdout()),
            stderr: Arc::new(ConsoleSink::stderr()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the output format by registry name
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Use a custom format registry
    #[must_use = "builder methods return a new value"]
    pub fn registry(mut self, registry: FormatRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Add an extra sink
    #[must_use = "builder methods return a new value"]
    pub fn stream(mut self, sink: Arc<dyn Sink>) -> Self {
        self.streams.push(sink);
        self
    }

    /// Add several extra sinks, keeping their order
    #[must_use = "builder methods return a new value"]
    pub fn streams<I>(mut self, sinks: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Sink>>,
    {
        self.streams.extend(sinks);
        self
    }

    /// Replace the standard channel
    #[must_use = "builder methods return a new value"]
    pub fn stdout(mut self, sink: Arc<dyn Sink>) -> Self {
        self.stdout = sink;
        self
    }

    /// Replace the error channel
    #[must_use = "builder methods return a new value"]
    pub fn stderr(mut self, sink: Arc<dyn Sink>) -> Self {
        self.stderr = sink;
        self
    }

    /// Replace the timestamp source
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Validate the configuration and build the Logger
    ///
    /// # Errors
    ///
    /// See [`Logger::new`].
    pub fn build(self) -> Result<Logger> {
        let renderer = self.registry.resolve(&self.format)?;

        if let Some(index) = self.streams.iter().position(|sink| !sink.is_writable()) {
            return Err(LoggerError::non_writable_stream(index));
        }

        Ok(Logger {
            format: self.format,
            renderer,
            sinks: self.streams,
            stdout: self.stdout,
            stderr: self.stderr,
            clock: self.clock,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemorySink;
    use crate::core::timestamp::FixedClock;
    use serde_json::json;

    const TIME: &str = "2025-01-08T10:30:45:123+0000";

    struct Harness {
        stdout: Arc<MemorySink>,
        stderr: Arc<MemorySink>,
    }

    fn harness(builder: LoggerBuilder) -> (Logger, Harness) {
        let stdout = Arc::new(MemorySink::new());
        let stderr = Arc::new(MemorySink::new());
        let logger = builder
            .stdout(stdout.clone())
            .stderr(stderr.clone())
            .clock(Arc::new(FixedClock::new(TIME)))
            .build()
            .unwrap();
        (logger, Harness { stdout, stderr })
    }

    #[test]
    fn test_default_format_is_simple() {
        let logger = Logger::new(LoggerOptions::default()).unwrap();
        assert_eq!(logger.format(), "simple");
        assert!(logger.sinks().is_empty());
    }

    #[test]
    fn test_json_format_option() {
        let logger = Logger::new(LoggerOptions::new().with_format("json")).unwrap();
        assert_eq!(logger.format(), "json");
    }

    #[test]
    fn test_invalid_formats_rejected() {
        for format in ["extended", "invalidFormat", ""] {
            let err = Logger::new(LoggerOptions::new().with_format(format)).unwrap_err();
            assert!(err.is_configuration());
            assert!(err.to_string().contains("json, simple"));
        }
    }

    #[test]
    fn test_non_writable_stream_rejected() {
        let good: Arc<dyn Sink> = Arc::new(MemorySink::new());
        let bad: Arc<dyn Sink> = Arc::new(MemorySink::closed());

        let err = Logger::new(LoggerOptions::new().with_streams(vec![good, bad])).unwrap_err();
        assert!(matches!(err, LoggerError::NonWritableStream { index: 1 }));
    }

    #[test]
    fn test_empty_streams_accepted() {
        let logger = Logger::new(LoggerOptions::new().with_streams(Vec::new())).unwrap();
        assert!(logger.sinks().is_empty());
    }

    #[test]
    fn test_error_routes_to_stderr() {
        let (logger, out) = harness(Logger::builder());
        logger.log("ERROR", "Error message", None).unwrap();

        assert_eq!(out.stderr.contents(), format!("[{}] [ERROR] [Error message]\n", TIME));
        assert!(out.stdout.contents().is_empty());
    }

    #[test]
    fn test_warning_routes_to_stdout() {
        let (logger, out) = harness(Logger::builder());
        logger.warning("Warning message", None).unwrap();

        assert_eq!(out.stdout.lines().len(), 1);
        assert!(out.stderr.contents().is_empty());
    }

    #[test]
    fn test_invalid_extra_info_writes_nothing() {
        let sink = Arc::new(MemorySink::new());
        let (logger, out) = harness(Logger::builder().stream(sink.clone()));

        let err = logger
            .log("LEVEL", "Test message", Some(&json!("extraInfo")))
            .unwrap_err();
        assert!(err.is_validation());

        let err = logger
            .info("Test message", Some(&json!({"req": "req"})))
            .unwrap_err();
        assert!(err.is_validation());

        assert!(out.stdout.contents().is_empty());
        assert!(out.stderr.contents().is_empty());
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn test_null_extra_info_is_ignored() {
        let (logger, out) = harness(Logger::builder());
        logger.info("ok", Some(&Value::Null)).unwrap();
        assert_eq!(out.stdout.contents(), format!("[{}] [INFO] [ok]\n", TIME));
    }

    #[test]
    fn test_falsy_extra_is_dropped() {
        let (logger, out) = harness(Logger::builder());
        logger.info("flag", Some(&json!({"extra": false}))).unwrap();
        logger.info("empty", Some(&json!({"extra": "", "req": ""}))).unwrap();

        assert_eq!(
            out.stdout.lines(),
            vec![format!("[{}] [INFO] [flag]", TIME), format!("[{}] [INFO] [empty]", TIME)]
        );
    }

    #[test]
    fn test_object_message_field_is_used() {
        let (logger, out) = harness(Logger::builder());
        logger.info(json!({"message": 42, "code": 1}), None).unwrap();
        assert_eq!(out.stdout.contents(), format!("[{}] [INFO] [42]\n", TIME));
    }

    #[test]
    fn test_error_value_message() {
        let (logger, out) = harness(Logger::builder());
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        logger.error(Message::from_error(&err), None).unwrap();

        assert_eq!(out.stderr.contents(), format!("[{}] [ERROR] [disk on fire]\n", TIME));
    }

    #[test]
    fn test_streams_receive_identical_line() {
        let first = Arc::new(MemorySink::new());
        let second = Arc::new(MemorySink::new());
        let (logger, out) = harness(
            Logger::builder()
                .format("json")
                .stream(first.clone())
                .stream(second.clone()),
        );

        logger
            .error("boom", Some(&json!({"extra": {"code": 500}})))
            .unwrap();

        let line = out.stderr.contents();
        assert_eq!(first.contents(), line);
        assert_eq!(second.contents(), line);

        let parsed: Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed["extra"]["code"], 500);
    }

    #[test]
    fn test_sink_failure_propagates() {
        let closed = Arc::new(MemorySink::new());
        let (logger, out) = harness(Logger::builder().stream(closed.clone()));
        closed.close();

        let err = logger.info("lost", None).unwrap_err();
        assert!(matches!(err, LoggerError::Io(_)));
        assert_eq!(out.stdout.lines().len(), 1);
    }
}
