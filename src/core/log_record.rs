//! Canonical log record

use super::log_level::Level;
use super::request::RequestInfo;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Primary message of a log call
///
/// Either plain text or the message of an error-like value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(String),
    Error(String),
}

impl Message {
    /// Use the display text of an error as the message
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Message::Error(err.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Message::Text(text) | Message::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Message::Error(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Message::Text(text) | Message::Error(text) => text,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<std::io::Error> for Message {
    fn from(err: std::io::Error) -> Self {
        Message::from_error(&err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Message {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Message::from_error(err.as_ref())
    }
}

impl From<Value> for Message {
    /// Objects exposing a truthy `message` field are treated as errors.
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Message::Text(text),
            Value::Object(ref map) => match map.get("message").filter(|m| is_truthy(m)) {
                Some(Value::String(text)) => Message::Error(text.clone()),
                Some(other) => Message::Error(other.to_string()),
                None => Message::Text(value.to_string()),
            },
            other => Message::Text(other.to_string()),
        }
    }
}

/// `null`, `false`, `0` and `""` count as absent input
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Normalized representation of a single log event
///
/// Built once per call and consumed by a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub time: String,
    pub level: Level,
    pub message: String,
    #[serde(skip_serializing_if = "RequestInfo::is_empty")]
    pub req: RequestInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl LogRecord {
    pub fn new(time: impl Into<String>, level: impl Into<Level>, message: impl Into<Message>) -> Self {
        Self {
            time: time.into(),
            level: level.into(),
            message: message.into().into_string(),
            req: RequestInfo::default(),
            extra: None,
        }
    }

    pub fn with_request(mut self, req: RequestInfo) -> Self {
        self.req = req;
        self
    }

    pub fn with_extra(mut self, extra: Option<Value>) -> Self {
        self.extra = extra;
        self
    }
}
