//! Per-session redirection options.

use serde::{Deserialize, Serialize};

/// Options applied to a single redirection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectOptions {
    /// When true, `close` on the redirected stream only flushes the
    /// override; when false it closes the override for real.
    pub no_close: bool,
}

impl Default for RedirectOptions {
    fn default() -> Self {
        Self { no_close: true }
    }
}

impl RedirectOptions {
    /// Create the default options (`no_close = true`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `no_close` flag.
    pub fn with_no_close(mut self, no_close: bool) -> Self {
        self.no_close = no_close;
        self
    }
}
