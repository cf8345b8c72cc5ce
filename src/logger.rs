//! Session-scoped log accumulator for PDF generation.
//!
//! Entries are appended in call order and never removed. The grouped JSON
//! report is derived on demand, so it can be rendered any number of times.
//!
//! ## Log File Format
//!
//! Each call to [`PdfLogger::write_to_file`] adds one block:
//! ```text
//!
//! Log started at: 2026-01-15 14:30:00
//! {
//!     "Page A": [
//!         "ok"
//!     ]
//! }
//! ```
//! The leading blank line is only written when the file already has content.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::ItemError;
use crate::report::GroupedReport;
use crate::scope::ItemScope;
use crate::sink::{ConsoleSink, LogSink};

/// Format of the `Log started at:` header line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged `(name, message)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub name: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Append-only record of log entries plus the sinks that mirror them.
pub struct PdfLogger {
    history: Vec<LogEntry>,
    sinks: Vec<Box<dyn LogSink>>,
}

impl Default for PdfLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfLogger {
    /// Creates an empty logger that mirrors entries to stdout.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            sinks: vec![Box::new(ConsoleSink::new())],
        }
    }

    /// Creates an empty logger with no sinks attached.
    pub fn without_sinks() -> Self {
        Self {
            history: Vec::new(),
            sinks: Vec::new(),
        }
    }

    pub fn add_sink(&mut self, sink: Box<dyn LogSink>) {
        self.sinks.push(sink);
    }

    /// Appends an entry and notifies every sink.
    ///
    /// Never fails. Sink errors are reported through `tracing` and dropped.
    pub fn log(&mut self, name: impl Into<String>, message: impl Into<String>) {
        let entry = LogEntry::new(name, message);
        for sink in &mut self.sinks {
            if let Err(e) = sink.emit(&entry) {
                tracing::warn!(item = %entry.name, error = %e, "Log sink failed");
            }
        }
        self.history.push(entry);
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Builds the grouped report.
    ///
    /// With `slim`, names logged exactly once map to a bare message.
    pub fn report(&self, slim: bool) -> GroupedReport {
        GroupedReport::from_entries(&self.history, slim)
    }

    /// Renders the grouped report as JSON indented with four spaces.
    pub fn to_json(&self, slim: bool) -> Result<String> {
        self.report(slim)
            .to_pretty_json()
            .context("Failed to serialize log report")
    }

    /// Writes a timestamped report block to `path`.
    ///
    /// The file is truncated when `overwrite` is set, appended to otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn write_to_file(&self, path: &Path, slim: bool, overwrite: bool) -> Result<()> {
        let mut options = OpenOptions::new();
        options.create(true);
        if overwrite {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }

        let mut file = options
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        let existing_len = file
            .metadata()
            .with_context(|| format!("Failed to stat log file: {}", path.display()))?
            .len();
        let json = self.to_json(slim)?;
        let now = chrono::Local::now().format(TIMESTAMP_FORMAT);

        let mut block = String::with_capacity(json.len() + 40);
        if existing_len != 0 {
            // terminate the previous report, then leave one blank line
            block.push_str("\n\n");
        }
        block.push_str("Log started at: ");
        block.push_str(&now.to_string());
        block.push('\n');
        block.push_str(&json);

        file.write_all(block.as_bytes())
            .with_context(|| format!("Failed to write log file: {}", path.display()))?;
        file.flush()
            .with_context(|| format!("Failed to flush log file: {}", path.display()))?;
        Ok(())
    }

    /// Runs `work` in a fresh scope named `item_name`.
    ///
    /// See [`ItemScope::run`] for the outcome rules.
    pub fn scope<T, F>(&mut self, item_name: &str, work: F) -> Result<Option<T>, ItemError>
    where
        F: FnOnce() -> Result<T, ItemError>,
    {
        ItemScope::open(item_name).run(self, work)
    }

    /// Flushes every sink, ignoring failures.
    pub fn flush_sinks(&mut self) {
        for sink in &mut self.sinks {
            if let Err(e) = sink.flush() {
                tracing::warn!(error = %e, "Log sink flush failed");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/logger_tests.rs"]
mod tests;
