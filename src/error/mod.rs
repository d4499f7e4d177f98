//! Error types for stdio redirection.
//!
//! `RedirectError` covers the mechanism's own failures. I/O failures of the
//! streams being routed are plain `std::io::Error`s and are never wrapped.

use std::io;

use thiserror::Error;

use crate::config::StreamRole;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RedirectError {
    /// `release` was called while no session was active for the role.
    #[error("unbalanced release of the {role} stream: no active session")]
    UnbalancedRelease { role: StreamRole },

    /// The process-wide handle cannot be replaced while sessions are active.
    #[error("the {role} stream is busy with {use_count} active session(s)")]
    RoleBusy { role: StreamRole, use_count: u32 },

    /// An operation was attempted on a closed stream.
    #[error("I/O operation on closed stream '{id}'")]
    Closed { id: String },
}

impl RedirectError {
    /// Shorthand for the closed-stream error of `id`.
    pub fn closed(id: impl Into<String>) -> Self {
        RedirectError::Closed { id: id.into() }
    }
}

impl From<RedirectError> for io::Error {
    fn from(e: RedirectError) -> Self {
        io::Error::other(e)
    }
}

/// Returns true if `err` reports an operation on a closed stream.
pub fn is_closed_error(err: &io::Error) -> bool {
    err.get_ref()
        .and_then(|inner| inner.downcast_ref::<RedirectError>())
        .is_some_and(|e| matches!(e, RedirectError::Closed { .. }))
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
