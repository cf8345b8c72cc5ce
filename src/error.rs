//! Error taxonomy for PDF generation items.
//!
//! Every failure raised inside an item scope is an [`ItemError`]. Only domain
//! errors ([`PdfError`]) carry an explicit criticality; everything else is
//! treated as critical and always propagates past the scope.

use std::fmt::{Display, Formatter};

/// Domain errors raised by the PDF generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PdfError {
    /// General generator failure. Critical unless stated otherwise.
    #[error("{message}")]
    General { message: String, critical: bool },
    /// Malformed or insufficient input data. Non-critical by default.
    #[error("{message}")]
    BadData { message: String, critical: bool },
}

impl PdfError {
    /// Creates a general domain error with `critical = true`.
    pub fn new(message: impl Into<String>) -> Self {
        Self::General {
            message: message.into(),
            critical: true,
        }
    }

    /// Creates a bad-data error with `critical = false`.
    pub fn bad_data(message: impl Into<String>) -> Self {
        Self::BadData {
            message: message.into(),
            critical: false,
        }
    }

    /// Overrides the default criticality.
    pub fn with_critical(self, critical: bool) -> Self {
        match self {
            Self::General { message, .. } => Self::General { message, critical },
            Self::BadData { message, .. } => Self::BadData { message, critical },
        }
    }

    /// Returns the category identifier used in log lines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::General { .. } => "PdfError",
            Self::BadData { .. } => "BadData",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::General { message, .. } | Self::BadData { message, .. } => message,
        }
    }

    pub fn is_critical(&self) -> bool {
        match self {
            Self::General { critical, .. } | Self::BadData { critical, .. } => *critical,
        }
    }
}

/// Failure of a unit of work executed inside an [`crate::ItemScope`].
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error(transparent)]
    Pdf(#[from] PdfError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Any foreign error, tagged with the category name it is logged under.
    #[error("{source}")]
    Other {
        kind: String,
        #[source]
        source: anyhow::Error,
    },
    /// The scope already reached a terminal state.
    #[error("scope for '{0}' is already closed")]
    ScopeClosed(String),
}

impl ItemError {
    /// Wraps a foreign error under an explicit category name.
    pub fn other(kind: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Other {
            kind: kind.into(),
            source: source.into(),
        }
    }

    pub fn kind_name(&self) -> &str {
        match self {
            Self::Pdf(err) => err.kind_name(),
            Self::Io(_) => "IoError",
            Self::Other { kind, .. } => kind,
            Self::ScopeClosed(_) => "ScopeClosed",
        }
    }

    /// Only non-critical domain errors may be suppressed by a scope.
    pub fn is_critical(&self) -> bool {
        match self {
            Self::Pdf(err) => err.is_critical(),
            _ => true,
        }
    }

    /// Summary stored in a scope's error slot.
    pub fn capture(&self) -> CapturedError {
        CapturedError {
            kind: self.kind_name().to_string(),
            message: self.to_string(),
            critical: self.is_critical(),
        }
    }
}

impl From<anyhow::Error> for ItemError {
    fn from(source: anyhow::Error) -> Self {
        Self::Other {
            kind: "Error".to_string(),
            source,
        }
    }
}

/// Cloneable record of an error caught by a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    pub kind: String,
    pub message: String,
    pub critical: bool,
}

impl Display for CapturedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
