//! Narrative game log.
//!
//! Player-facing messages ("Angriff auf Mine!") go through [`GameLog`].
//! Hosts usually render a [`MessageLog`]; [`TracingLog`] mirrors the same
//! lines into `tracing` for headless runs.

use serde::{Deserialize, Serialize};

/// Severity of a narrative log line. Drives styling in the host UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Warning,
    Success,
    Error,
}

/// A single narrative log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub level: LogLevel,
}

/// Sink for narrative log lines.
pub trait GameLog {
    fn log(&mut self, message: &str, level: LogLevel);
}

/// In-memory log, optionally bounded.
///
/// When a capacity is set, the oldest entries are dropped first.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    entries: Vec<LogEntry>,
    capacity: Option<usize>,
}

impl MessageLog {
    /// Create an unbounded log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that keeps at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Iterate over entries of one level.
    pub fn at_level(&self, level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level == level)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl GameLog for MessageLog {
    fn log(&mut self, message: &str, level: LogLevel) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            if self.entries.len() >= capacity {
                let overflow = self.entries.len() + 1 - capacity;
                self.entries.drain(..overflow);
            }
        }
        self.entries.push(LogEntry {
            message: message.to_string(),
            level,
        });
    }
}

/// Forwards narrative lines to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl GameLog for TracingLog {
    fn log(&mut self, message: &str, level: LogLevel) {
        match level {
            LogLevel::Info => {
                tracing::info!(target: "site_encounter::narrative", "{message}");
            }
            LogLevel::Warning => {
                tracing::warn!(target: "site_encounter::narrative", "{message}");
            }
            LogLevel::Success => {
                tracing::info!(target: "site_encounter::narrative", success = true, "{message}");
            }
            LogLevel::Error => {
                tracing::error!(target: "site_encounter::narrative", "{message}");
            }
        }
    }
}
