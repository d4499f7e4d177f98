//! Front-door handles for the process-wide standard streams.

use std::io::{self, Read, Write};
use std::sync::Arc;

use super::StdioStream;
use crate::config::StreamRole;
use crate::registry;

/// A handle to one of the process-wide standard streams.
///
/// The handle holds no stream itself: every call looks up the role's
/// current process-wide handle, so code using it is routed through the
/// proxy whenever a redirection session is active anywhere in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdioHandle {
    role: StreamRole,
}

/// Handle to the process-wide standard input.
pub fn stdin() -> StdioHandle {
    StdioHandle::new(StreamRole::Input)
}

/// Handle to the process-wide standard output.
pub fn stdout() -> StdioHandle {
    StdioHandle::new(StreamRole::Output)
}

/// Handle to the process-wide standard error.
pub fn stderr() -> StdioHandle {
    StdioHandle::new(StreamRole::Error)
}

impl StdioHandle {
    /// Create a handle for `role`.
    pub fn new(role: StreamRole) -> Self {
        Self { role }
    }

    /// The role this handle resolves.
    pub fn role(&self) -> StreamRole {
        self.role
    }

    /// The stream currently installed for the role.
    pub fn current(&self) -> Arc<dyn StdioStream> {
        registry::current(self.role)
    }

    /// Identifier of the stream that would serve this thread.
    pub fn id(&self) -> String {
        self.current().id()
    }

    /// Read one line, including the trailing newline, appending it to `buf`.
    pub fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        self.current().read_line(buf)
    }

    /// Close the stream as seen by this thread.
    pub fn close(&self) -> io::Result<()> {
        self.current().close()
    }

    /// Whether the stream serving this thread is closed.
    pub fn is_closed(&self) -> bool {
        self.current().is_closed()
    }

    /// Whether the stream serving this thread is a terminal.
    pub fn is_terminal(&self) -> bool {
        self.current().is_terminal()
    }
}

impl Read for StdioHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.current().read(buf)
    }
}

impl Write for StdioHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.current().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.current().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.current().flush()
    }
}
