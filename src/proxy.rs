//! Per-thread routing proxy installed in place of a standard stream.
//!
//! A `StreamProxy` wraps the role's original handle. Each thread may
//! register an override; every operation from that thread then goes to the
//! override, while threads without one keep talking to the original.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::StreamRole;
use crate::io::StdioStream;

static NEXT_PROXY_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    // proxy id -> override registered by this thread
    static OVERRIDES: RefCell<HashMap<u64, Override>> = RefCell::new(HashMap::new());
}

/// A thread's substitute stream plus its close policy.
#[derive(Debug, Clone)]
pub struct Override {
    /// The caller-supplied stream.
    pub stream: Arc<dyn StdioStream>,
    /// When true, `close` through the proxy only flushes `stream`.
    pub no_close: bool,
}

/// Routes every operation to the calling thread's override or the original.
#[derive(Debug)]
pub struct StreamProxy {
    id: u64,
    role: StreamRole,
    original: Arc<dyn StdioStream>,
}

impl StreamProxy {
    /// Create a proxy delegating to `original` for unregistered threads.
    pub fn new(role: StreamRole, original: Arc<dyn StdioStream>) -> Self {
        Self {
            id: NEXT_PROXY_ID.fetch_add(1, Ordering::Relaxed),
            role,
            original,
        }
    }

    /// The role this proxy stands in for.
    pub fn role(&self) -> StreamRole {
        self.role
    }

    /// The handle used by threads without an override.
    pub fn original(&self) -> &Arc<dyn StdioStream> {
        &self.original
    }

    /// Register `stream` as the calling thread's override.
    ///
    /// Returns the override it displaced, if any.
    pub fn register(&self, stream: Arc<dyn StdioStream>, no_close: bool) -> Option<Override> {
        self.register_override(Override { stream, no_close })
    }

    /// Register a prepared override for the calling thread.
    ///
    /// Registering the proxy as its own override keeps the thread's current
    /// target, so routing can never loop back into this proxy.
    pub fn register_override(&self, mut entry: Override) -> Option<Override> {
        if std::ptr::addr_eq(Arc::as_ptr(&entry.stream), self as *const Self) {
            entry.stream = self.target();
        }
        tracing::trace!(role = %self.role, stream = %entry.stream.id(), "register override");
        OVERRIDES.with(|slots| slots.borrow_mut().insert(self.id, entry))
    }

    /// Clear the calling thread's override, returning it.
    pub fn unregister(&self) -> Option<Override> {
        tracing::trace!(role = %self.role, "unregister override");
        OVERRIDES.with(|slots| slots.borrow_mut().remove(&self.id))
    }

    /// Whether the calling thread has an override registered.
    pub fn has_override(&self) -> bool {
        OVERRIDES.with(|slots| slots.borrow().contains_key(&self.id))
    }

    /// The calling thread's override, if any.
    ///
    /// The entry is cloned out so no thread-local borrow is held while the
    /// caller performs I/O (the override may itself be a proxy).
    pub fn current_override(&self) -> Option<Override> {
        OVERRIDES.with(|slots| slots.borrow().get(&self.id).cloned())
    }

    fn target(&self) -> Arc<dyn StdioStream> {
        match self.current_override() {
            Some(entry) => entry.stream,
            None => Arc::clone(&self.original),
        }
    }
}

impl StdioStream for StreamProxy {
    fn id(&self) -> String {
        self.target().id()
    }

    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        self.target().read(buf)
    }

    fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        self.target().read_line(buf)
    }

    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.target().write(buf)
    }

    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.target().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        self.target().flush()
    }

    fn close(&self) -> io::Result<()> {
        match self.current_override() {
            Some(Override {
                stream,
                no_close: true,
            }) => stream.flush(),
            Some(Override {
                stream,
                no_close: false,
            }) => stream.close(),
            None => self.original.close(),
        }
    }

    fn is_closed(&self) -> bool {
        self.target().is_closed()
    }

    fn is_terminal(&self) -> bool {
        self.target().is_terminal()
    }

    fn readable(&self) -> bool {
        self.target().readable()
    }

    fn writable(&self) -> bool {
        self.target().writable()
    }
}
