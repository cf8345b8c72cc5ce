//! Sinks notified on every appended log entry.
//!
//! The accumulator keeps the record; sinks only mirror it for live
//! visibility. A failing sink never affects the record.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::logger::LogEntry;

/// Receives each entry right after it is appended.
pub trait LogSink {
    /// Mirrors one entry (print or persist).
    fn emit(&mut self, entry: &LogEntry) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Prints `<name>: message` to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn console_line(entry: &LogEntry) -> String {
    format!("<{}>: {}", entry.name, entry.message)
}

impl LogSink for ConsoleSink {
    fn emit(&mut self, entry: &LogEntry) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", console_line(entry))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}

/// Forwards entries as `tracing` events.
///
/// External telemetry hooks in by subscribing to the `pdf_logger::entry` target.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&mut self, entry: &LogEntry) -> Result<()> {
        tracing::info!(
            target: "pdf_logger::entry",
            item = %entry.name,
            message = %entry.message,
            "log entry"
        );
        Ok(())
    }
}

/// A single line of the JSONL event log.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventLine {
    /// Monotonic sequence number, starting at 1
    pub seq: u64,
    /// ISO 8601 timestamp with microseconds
    pub ts: String,
    pub name: String,
    pub message: String,
}

/// Appends every entry as one JSON line.
pub struct JsonlSink {
    file: File,
    path: PathBuf,
    seq: u64,
}

impl JsonlSink {
    /// Opens `path` for appending, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be opened.
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open event log: {}", path.display()))?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
            seq: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for JsonlSink {
    fn emit(&mut self, entry: &LogEntry) -> Result<()> {
        self.seq += 1;
        let line = EventLine {
            seq: self.seq,
            ts: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            name: entry.name.clone(),
            message: entry.message.clone(),
        };
        let json = serde_json::to_string(&line)?;
        writeln!(self.file, "{}", json)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/sink_tests.rs"]
mod tests;
