//! Builder for redirecting several standard streams at once.

use std::sync::Arc;

use crate::config::{RedirectOptions, StreamRole};
use crate::io::{MemoryStream, StdioStream};
use crate::session::RedirectSession;

/// Collects streams for each role and enters them together.
///
/// ```rust,ignore
/// use std::io::Write;
/// use std::sync::Arc;
/// use stdio_proxy::{MemoryStream, RedirectBuilder};
///
/// let out = Arc::new(MemoryStream::new("out"));
/// RedirectBuilder::new()
///     .stdout(out.clone())
///     .run(|| writeln!(stdio_proxy::stdout(), "hello"))?;
/// assert_eq!(out.contents_string(), "hello\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct RedirectBuilder {
    input: Option<Arc<dyn StdioStream>>,
    output: Option<Arc<dyn StdioStream>>,
    error: Option<Arc<dyn StdioStream>>,
    options: RedirectOptions,
}

impl RedirectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdin(mut self, stream: Arc<dyn StdioStream>) -> Self {
        self.input = Some(stream);
        self
    }

    pub fn stdout(mut self, stream: Arc<dyn StdioStream>) -> Self {
        self.output = Some(stream);
        self
    }

    pub fn stderr(mut self, stream: Arc<dyn StdioStream>) -> Self {
        self.error = Some(stream);
        self
    }

    pub fn with_options(mut self, options: RedirectOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_no_close(mut self, no_close: bool) -> Self {
        self.options = self.options.with_no_close(no_close);
        self
    }

    /// Enter a session for every configured role: input, output, then error.
    pub fn enter(self) -> RedirectGuard {
        let options = self.options;
        let sessions = [
            (StreamRole::Input, self.input),
            (StreamRole::Output, self.output),
            (StreamRole::Error, self.error),
        ]
        .into_iter()
        .filter_map(|(role, stream)| stream.map(|s| RedirectSession::enter(role, s, options)))
        .collect();
        RedirectGuard { sessions }
    }

    /// Run `f` with the configured redirections active.
    pub fn run<F, R>(self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = self.enter();
        f()
    }
}

/// The sessions entered by [`RedirectBuilder::enter`].
///
/// Dropping the guard ends them in reverse order.
#[must_use = "the redirections end as soon as the guard is dropped"]
#[derive(Debug)]
pub struct RedirectGuard {
    sessions: Vec<RedirectSession>,
}

impl RedirectGuard {
    /// Roles redirected by this guard.
    pub fn roles(&self) -> Vec<StreamRole> {
        self.sessions.iter().map(RedirectSession::role).collect()
    }
}

impl Drop for RedirectGuard {
    fn drop(&mut self) {
        while let Some(session) = self.sessions.pop() {
            drop(session);
        }
    }
}

/// Run `f` with standard output captured for the current thread.
pub fn capture_output<F, R>(f: F) -> (R, Vec<u8>)
where
    F: FnOnce() -> R,
{
    let sink = Arc::new(MemoryStream::new("captured-stdout"));
    let value = RedirectBuilder::new().stdout(sink.clone()).run(f);
    (value, sink.contents())
}
