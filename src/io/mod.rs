//! Stream abstractions for the three standard roles.
//!
//! This module provides:
//! - `StdioStream`: Trait for anything that can stand in for a standard stream
//! - Platform originals wrapping `std::io`, plus file-backed streams
//! - In-memory streams for capturing and feeding data
//! - `StdioHandle`: The front door that resolves the current process-wide handle

mod handle;
mod memory;
mod std_io;
mod stream;

pub use handle::{StdioHandle, stderr, stdin, stdout};
pub use memory::MemoryStream;
pub use std_io::{FileStream, PlatformStderr, PlatformStdin, PlatformStdout};
pub use stream::StdioStream;
