//! Log level definitions and channel routing

use super::error::LoggerError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Built-in output destination selected by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Standard output
    Standard,
    /// Standard error
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "WARNING")]
    Warning,
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "DEBUG")]
    Debug,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Only ERROR is written to the error channel; WARNING stays on stdout.
    pub fn channel(&self) -> Channel {
        match self {
            LogLevel::Error => Channel::Error,
            LogLevel::Warning | LogLevel::Info | LogLevel::Debug => Channel::Standard,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}

/// Level label carried by a single record
///
/// Known severities drive routing; custom labels are written verbatim and
/// always go to the standard channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Known(LogLevel),
    Custom(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Known(level) => level.as_str(),
            Level::Custom(label) => label,
        }
    }

    pub fn channel(&self) -> Channel {
        match self {
            Level::Known(level) => level.channel(),
            Level::Custom(_) => Channel::Standard,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        Level::Known(level)
    }
}

impl From<&str> for Level {
    /// Exact labels map to known levels; everything else is kept as a custom label.
    fn from(label: &str) -> Self {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == label)
            .map(Level::Known)
            .unwrap_or_else(|| Level::Custom(label.to_string()))
    }
}

impl From<String> for Level {
    fn from(label: String) -> Self {
        match Level::from(label.as_str()) {
            Level::Known(level) => Level::Known(level),
            Level::Custom(_) => Level::Custom(label),
        }
    }
}
