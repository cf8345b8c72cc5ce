use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logger::PdfLogger;
use crate::sink::{JsonlSink, TracingSink};

/// Logger settings for a batch run, usually loaded from YAML.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Report file written at the end of the run. Default: `json_log.log`
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Collapse single-message groups to a bare value
    #[serde(default)]
    pub slim: bool,
    /// Truncate the report file instead of appending
    #[serde(default)]
    pub overwrite: bool,
    /// Mirror entries to stdout. Default: true
    #[serde(default = "default_console")]
    pub console: bool,
    /// Forward entries as `tracing` events
    #[serde(default)]
    pub tracing: bool,
    /// Optional JSONL file receiving every entry as it is logged
    #[serde(default)]
    pub event_log: Option<PathBuf>,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("json_log.log")
}

fn default_console() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            slim: false,
            overwrite: false,
            console: default_console(),
            tracing: false,
            event_log: None,
        }
    }
}

impl LoggerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file as YAML: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.log_file.as_os_str().is_empty() {
            anyhow::bail!("log_file must not be empty");
        }
        if let Some(event_log) = &self.event_log {
            if event_log.as_os_str().is_empty() {
                anyhow::bail!("event_log must not be empty when set");
            }
            if *event_log == self.log_file {
                anyhow::bail!(
                    "event_log and log_file must differ: {}",
                    event_log.display()
                );
            }
        }
        Ok(())
    }

    /// Constructs a logger with the sinks this config enables.
    pub fn build_logger(&self) -> Result<PdfLogger> {
        let mut logger = if self.console {
            PdfLogger::new()
        } else {
            PdfLogger::without_sinks()
        };
        if self.tracing {
            logger.add_sink(Box::new(TracingSink));
        }
        if let Some(path) = &self.event_log {
            logger.add_sink(Box::new(JsonlSink::new(path)?));
        }
        Ok(logger)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
