//! Error-containment scope for one PDF item.
//!
//! A scope runs a unit of work, logs exactly one outcome line for its item and
//! decides whether a failure propagates:
//!
//! | outcome                        | logged               | result          |
//! |--------------------------------|----------------------|-----------------|
//! | `Ok(value)`                    | `ok`                 | `Ok(Some(value))` |
//! | non-critical `PdfError`        | `<Kind>: <message>`  | `Ok(None)`      |
//! | critical `PdfError`, any other | `<Kind>: <message>`  | `Err(error)`    |

use crate::error::{CapturedError, ItemError};
use crate::logger::PdfLogger;

/// Message logged when a unit of work completes normally.
pub const OK_MESSAGE: &str = "ok";

/// Lifecycle of a scope. Both closed states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeState {
    Open,
    ClosedOk,
    ClosedError,
}

/// Handle for one item's unit of work.
///
/// The handle does not borrow the logger, so callers can keep several closed
/// scopes around and inspect their captured errors afterwards.
#[derive(Debug, Clone)]
pub struct ItemScope {
    item_name: String,
    state: ScopeState,
    error: Option<CapturedError>,
}

impl ItemScope {
    pub fn open(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            state: ScopeState::Open,
            error: None,
        }
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn state(&self) -> ScopeState {
        self.state
    }

    /// Error captured when the scope closed, if any.
    pub fn error(&self) -> Option<&CapturedError> {
        self.error.as_ref()
    }

    /// Runs `work`, logs its outcome to `logger` and closes the scope.
    ///
    /// Returns `Ok(Some(_))` on success and `Ok(None)` when a non-critical
    /// domain error was suppressed. Any other error is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the work's error when it is critical, and
    /// [`ItemError::ScopeClosed`] when the scope was already closed. The
    /// latter is not logged.
    pub fn run<T, F>(&mut self, logger: &mut PdfLogger, work: F) -> Result<Option<T>, ItemError>
    where
        F: FnOnce() -> Result<T, ItemError>,
    {
        if self.state != ScopeState::Open {
            return Err(ItemError::ScopeClosed(self.item_name.clone()));
        }

        match work() {
            Ok(value) => {
                self.state = ScopeState::ClosedOk;
                logger.log(self.item_name.as_str(), OK_MESSAGE);
                tracing::debug!(item = %self.item_name, "Item completed");
                Ok(Some(value))
            }
            Err(error) => {
                let captured = error.capture();
                self.state = ScopeState::ClosedError;
                logger.log(self.item_name.as_str(), captured.to_string());

                let suppress = !captured.critical;
                tracing::warn!(
                    item = %self.item_name,
                    kind = %captured.kind,
                    suppressed = suppress,
                    "Item failed: {}",
                    captured.message
                );
                self.error = Some(captured);

                if suppress {
                    Ok(None)
                } else {
                    Err(error)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod tests;
