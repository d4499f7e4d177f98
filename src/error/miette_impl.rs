//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::RedirectError;

/// A diagnostic wrapper for redirection errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct RedirectDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<RedirectError>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<RedirectError> for RedirectDiagnostic {
    fn from(e: RedirectError) -> Self {
        let help = match &e {
            RedirectError::UnbalancedRelease { .. } => {
                "Sessions must be dropped on the thread that entered them, in reverse order"
            }
            RedirectError::RoleBusy { .. } => {
                "Drop every active redirection session before replacing the stream"
            }
            RedirectError::Closed { .. } => {
                "Enter the session with no_close = true to keep the override open"
            }
        };
        let severity = match &e {
            RedirectError::UnbalancedRelease { .. } => Severity::Error,
            RedirectError::RoleBusy { .. } | RedirectError::Closed { .. } => Severity::Warning,
        };
        RedirectDiagnostic {
            message: e.to_string(),
            source: Some(e),
            help: Some(help.into()),
            severity,
        }
    }
}

impl From<RedirectError> for miette::Report {
    fn from(e: RedirectError) -> Self {
        miette::Report::new(RedirectDiagnostic::from(e))
    }
}
