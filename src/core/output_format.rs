//! Output formats for log records
//!
//! Provides the renderers that turn a [`LogRecord`] into a single line:
//! - `simple`: Human-readable bracketed format (default)
//! - `json`: Machine-readable JSON object
//!
//! Formats are looked up by name in a [`FormatRegistry`], so new renderers can
//! be registered without touching the logger.

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Format name used when none is configured
pub const DEFAULT_FORMAT: &str = "simple";

/// Format name that is never accepted
pub const RESERVED_FORMAT: &str = "extended";

/// Renders a record to a single line without the trailing newline
pub trait Renderer: Send + Sync {
    fn render(&self, record: &LogRecord) -> Result<String>;
}

/// Human-readable text format
///
/// Example: `[2025-01-08T10:30:45:123+0000] [INFO] [Request processed] | method=GET endpoint=/users | {"user":42}`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Escape line breaks and tabs so one record always stays on one line
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn display_value(value: &Value) -> String {
        match value {
            Value::String(s) => Self::sanitize(s),
            other => other.to_string(),
        }
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, record: &LogRecord) -> Result<String> {
        let mut output = format!(
            "[{}] [{}] [{}]",
            record.time,
            Self::sanitize(record.level.as_str()),
            Self::sanitize(&record.message)
        );

        if !record.req.is_empty() {
            let fields = record
                .req
                .fields()
                .map(|(name, value)| format!("{}={}", name, Self::display_value(value)))
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(" | ");
            output.push_str(&fields);
        }

        if let Some(ref extra) = record.extra {
            output.push_str(" | ");
            output.push_str(&serde_json::to_string(extra)?);
        }

        Ok(output)
    }
}

/// JSON format for machine processing
///
/// Example: `{"time":"2025-01-08T10:30:45:123+0000","level":"INFO","message":"Request processed"}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, record: &LogRecord) -> Result<String> {
        Ok(serde_json::to_string(record)?)
    }
}

/// Name to renderer mapping
#[derive(Clone)]
pub struct FormatRegistry {
    renderers: BTreeMap<String, Arc<dyn Renderer>>,
}

impl FormatRegistry {
    /// Registry with the built-in `simple` and `json` formats
    #[must_use]
    pub fn new() -> Self {
        let mut renderers: BTreeMap<String, Arc<dyn Renderer>> = BTreeMap::new();
        renderers.insert("simple".to_string(), Arc::new(SimpleRenderer));
        renderers.insert("json".to_string(), Arc::new(JsonRenderer));
        Self { renderers }
    }

    /// Add or replace a renderer
    ///
    /// # Errors
    ///
    /// The reserved name `extended` cannot be registered.
    pub fn register<R: Renderer + 'static>(&mut self, name: impl Into<String>, renderer: R) -> Result<()> {
        let name = name.into();
        if name == RESERVED_FORMAT {
            return Err(LoggerError::invalid_format(name, self.names()));
        }
        self.renderers.insert(name, Arc::new(renderer));
        Ok(())
    }

    /// Look up a renderer by name
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidFormat`] listing the valid names when
    /// `name` is unknown or reserved.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Renderer>> {
        if name == RESERVED_FORMAT {
            return Err(LoggerError::invalid_format(name, self.names()));
        }
        self.renderers
            .get(name)
            .cloned()
            .ok_or_else(|| LoggerError::invalid_format(name, self.names()))
    }

    pub fn contains(&self, name: &str) -> bool {
        name != RESERVED_FORMAT && self.renderers.contains_key(name)
    }

    /// Registered format names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.renderers.keys().cloned().collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.names())
            .finish()
    }
}
