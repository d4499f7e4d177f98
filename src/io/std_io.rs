//! Standard stream implementations for the platform handles and files.

use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::StdioStream;
use crate::error::RedirectError;

fn unsupported(id: &str, op: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        format!("stream '{id}' does not support {op}"),
    )
}

/// The platform's standard input.
///
/// Closing only marks the handle closed; the real descriptor stays open.
#[derive(Debug, Default)]
pub struct PlatformStdin {
    closed: AtomicBool,
}

impl PlatformStdin {
    /// Create a new stdin handle.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StdioStream for PlatformStdin {
    fn id(&self) -> String {
        "<stdin>".into()
    }

    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        if self.is_closed() {
            return Err(RedirectError::closed(self.id()).into());
        }
        io::stdin().lock().read(buf)
    }

    fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        if self.is_closed() {
            return Err(RedirectError::closed(self.id()).into());
        }
        io::stdin().read_line(buf)
    }

    fn write(&self, _buf: &[u8]) -> io::Result<usize> {
        Err(unsupported("<stdin>", "write"))
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    fn close(&self) -> io::Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn readable(&self) -> bool {
        true
    }

    fn writable(&self) -> bool {
        false
    }
}

macro_rules! platform_writer {
    ($name:ident, $open:path, $id:literal, $doc:literal) => {
        #[doc = $doc]
        ///
        /// Closing flushes and marks the handle closed; the real descriptor
        /// stays open.
        #[derive(Debug, Default)]
        pub struct $name {
            closed: AtomicBool,
        }

        impl $name {
            /// Create a new handle.
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl StdioStream for $name {
            fn id(&self) -> String {
                $id.into()
            }

            fn read(&self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(unsupported($id, "read"))
            }

            fn write(&self, buf: &[u8]) -> io::Result<usize> {
                if self.is_closed() {
                    return Err(RedirectError::closed($id).into());
                }
                $open().lock().write(buf)
            }

            fn flush(&self) -> io::Result<()> {
                if self.is_closed() {
                    return Err(RedirectError::closed($id).into());
                }
                $open().lock().flush()
            }

            fn close(&self) -> io::Result<()> {
                if self.closed.swap(true, Ordering::SeqCst) {
                    return Ok(());
                }
                $open().lock().flush()
            }

            fn is_closed(&self) -> bool {
                self.closed.load(Ordering::SeqCst)
            }

            fn is_terminal(&self) -> bool {
                $open().is_terminal()
            }

            fn readable(&self) -> bool {
                false
            }

            fn writable(&self) -> bool {
                true
            }
        }
    };
}

platform_writer!(PlatformStdout, io::stdout, "<stdout>", "The platform's standard output.");
platform_writer!(PlatformStderr, io::stderr, "<stderr>", "The platform's standard error.");

/// A stream backed by a file on disk.
///
/// `close` flushes and drops the file descriptor.
#[derive(Debug)]
pub struct FileStream {
    id: String,
    path: PathBuf,
    file: Mutex<Option<File>>,
    readable: bool,
    writable: bool,
}

impl FileStream {
    /// Open an existing file for reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(Self::from_file(path.as_ref(), file, true, false))
    }

    /// Create (or truncate) a file for writing.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path.as_ref())?;
        Ok(Self::from_file(path.as_ref(), file, false, true))
    }

    /// Open a file for appending, creating it if needed.
    pub fn append(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self::from_file(path.as_ref(), file, false, true))
    }

    fn from_file(path: &Path, file: File, readable: bool, writable: bool) -> Self {
        Self {
            id: path.to_string_lossy().into_owned(),
            path: path.to_path_buf(),
            file: Mutex::new(Some(file)),
            readable,
            writable,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_file<R>(&self, f: impl FnOnce(&mut File) -> io::Result<R>) -> io::Result<R> {
        match self.lock().as_mut() {
            Some(file) => f(file),
            None => Err(RedirectError::closed(&self.id).into()),
        }
    }
}

impl StdioStream for FileStream {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.readable {
            return Err(unsupported(&self.id, "read"));
        }
        self.with_file(|file| file.read(buf))
    }

    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        if !self.writable {
            return Err(unsupported(&self.id, "write"));
        }
        self.with_file(|file| file.write(buf))
    }

    fn flush(&self) -> io::Result<()> {
        self.with_file(|file| file.flush())
    }

    fn close(&self) -> io::Result<()> {
        match self.lock().take() {
            Some(mut file) => file.flush(),
            None => Ok(()),
        }
    }

    fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    fn readable(&self) -> bool {
        self.readable
    }

    fn writable(&self) -> bool {
        self.writable
    }
}
