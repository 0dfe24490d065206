//! Transient, caller-owned record of stock additions. Never persisted.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    at: DateTime<Local>,
    description: String,
}

impl LogEntry {
    pub fn new(at: DateTime<Local>, description: impl Into<String>) -> Self {
        Self {
            at,
            description: description.into(),
        }
    }

    pub fn at(&self) -> DateTime<Local> {
        self.at
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.description
        )
    }
}

/// Ordered sequence of [`LogEntry`] values, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationLog {
    entries: Vec<LogEntry>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current local time.
    pub fn record(&mut self, description: impl Into<String>) -> &LogEntry {
        self.push(LogEntry::new(Local::now(), description))
    }

    pub fn push(&mut self, entry: LogEntry) -> &LogEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
