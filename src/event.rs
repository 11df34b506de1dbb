//! Log events received from the host pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a log event, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Verbose,
    Debug,
    Information,
    Warning,
    Error,
    Fatal,
}

impl Level {
    /// Every level, in ascending severity order.
    pub const ALL: [Level; 6] = [
        Level::Verbose,
        Level::Debug,
        Level::Information,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    /// String name substituted for the `{level}` placeholder.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Verbose => "Verbose",
            Level::Debug => "Debug",
            Level::Information => "Information",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One structured log event, read-only input to a dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    /// Unique event id, used in permalinks.
    pub id: String,
    /// Event severity.
    pub level: Level,
    /// Fully rendered, human-readable message text.
    pub rendered_message: String,
    /// Event timestamp in UTC.
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    /// Create an event stamped with the current time.
    pub fn new(id: impl Into<String>, level: Level, rendered_message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level,
            rendered_message: rendered_message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Override the timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
