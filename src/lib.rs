//! Structured item logging and error containment for PDF generation.
//!
//! A batch run creates one [`PdfLogger`], runs each item (page, chart, table)
//! inside an [`ItemScope`], and finally renders the grouped report:
//!
//! ```rust
//! use pdf_logger::{ItemError, PdfError, PdfLogger};
//!
//! let mut logger = PdfLogger::without_sinks();
//! logger.scope("Page A", || Ok(()))?;
//! logger.scope("Page B", || -> Result<(), ItemError> {
//!     Err(PdfError::bad_data("Not enough data points").into())
//! })?;
//!
//! let json = logger.to_json(true)?;
//! assert!(json.contains("\"Page B\": \"BadData: Not enough data points\""));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod report;
pub mod scope;
pub mod sink;

pub use config::LoggerConfig;
pub use error::{CapturedError, ItemError, PdfError};
pub use logger::{LogEntry, PdfLogger};
pub use report::{GroupedReport, ReportValue};
pub use scope::{ItemScope, ScopeState};
pub use sink::{ConsoleSink, JsonlSink, LogSink, TracingSink};
