//! In-memory stream implementation for feeding and capturing data.

use std::io::{self, BufRead, Cursor, Read, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::StdioStream;
use crate::error::RedirectError;

/// In-memory byte stream.
///
/// Reads and writes share one cursor, like an in-memory file: a stream
/// created with [`MemoryStream::with_input`] is read from the start, and a
/// stream created with [`MemoryStream::new`] collects whatever is written.
#[derive(Debug)]
pub struct MemoryStream {
    id: String,
    buf: Mutex<Cursor<Vec<u8>>>,
    closed: AtomicBool,
    flushes: AtomicUsize,
}

impl MemoryStream {
    /// Create a new empty in-memory stream.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_input(id, Vec::new())
    }

    /// Create a new in-memory stream positioned at the start of `data`.
    pub fn with_input(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            buf: Mutex::new(Cursor::new(data)),
            closed: AtomicBool::new(false),
            flushes: AtomicUsize::new(0),
        }
    }

    /// Create a new in-memory stream from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::with_input(id, data.into().into_bytes())
    }

    /// Get the whole buffer as bytes. Still available after `close`.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().get_ref().clone()
    }

    /// Get the whole buffer as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Number of successful `flush` calls so far.
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Cursor<Vec<u8>>> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.is_closed() {
            return Err(RedirectError::closed(&self.id).into());
        }
        Ok(())
    }
}

impl StdioStream for MemoryStream {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        self.ensure_open()?;
        self.lock().read(buf)
    }

    fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        self.ensure_open()?;
        self.lock().read_line(buf)
    }

    fn write(&self, data: &[u8]) -> io::Result<usize> {
        self.ensure_open()?;
        self.lock().write(data)
    }

    fn flush(&self) -> io::Result<()> {
        self.ensure_open()?;
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn close(&self) -> io::Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn readable(&self) -> bool {
        true
    }

    fn writable(&self) -> bool {
        true
    }
}
