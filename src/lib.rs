//! # stdio_proxy
//!
//! Thread-safe, per-thread redirection of the process-wide standard streams.
//!
//! ## Overview
//!
//! stdio_proxy provides:
//! - **Process-wide handles**: `stdin()`, `stdout()` and `stderr()` resolve the
//!   role's current handle on every call, so unaware code follows redirection
//! - **Per-thread overrides**: a thread redirects a role to its own stream
//!   without affecting any other thread
//! - **Reference-counted install**: the routing proxy is swapped in by the first
//!   session on a role and the original is restored by the last one
//! - **Scoped sessions**: RAII guards undo registration and install on every
//!   exit path, including panics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::io::Write;
//! use std::sync::Arc;
//! use stdio_proxy::{MemoryStream, redirect_input, redirect_output};
//!
//! let input = Arc::new(MemoryStream::from_string("in", "hello\n"));
//! let output = Arc::new(MemoryStream::new("out"));
//!
//! {
//!     let _stdin = redirect_input(input.clone());
//!     let _stdout = redirect_output(output.clone());
//!
//!     let mut line = String::new();
//!     stdio_proxy::stdin().read_line(&mut line)?;
//!     write!(stdio_proxy::stdout(), "read: {line}")?;
//! }
//!
//! assert_eq!(output.contents_string(), "read: hello\n");
//! ```
//!
//! ## Semantics
//!
//! - A thread without a session on a role talks to the role's original handle,
//!   even while other threads are redirected.
//! - With `no_close = true` (the default), `close()` through a redirected
//!   handle only flushes the caller's stream; with `no_close = false` it closes
//!   it.
//! - Nested sessions for the same role on one thread stack and unwind in
//!   reverse order.
//! - Concurrent unredirected access to an original handle is synchronized only
//!   as far as that handle synchronizes itself.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette

pub mod builder;
pub mod config;
pub mod error;
pub mod io;
pub mod proxy;
pub mod registry;
pub mod session;

pub use builder::{RedirectBuilder, RedirectGuard, capture_output};
pub use config::{RedirectOptions, StreamRole};
pub use error::RedirectError;
pub use io::{
    FileStream, MemoryStream, PlatformStderr, PlatformStdin, PlatformStdout, StdioHandle,
    StdioStream, stderr, stdin, stdout,
};
pub use proxy::{Override, StreamProxy};
pub use registry::RoleStats;
pub use session::{
    RedirectSession, redirect_error, redirect_error_with, redirect_input, redirect_input_with,
    redirect_output, redirect_output_with,
};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::RedirectDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
