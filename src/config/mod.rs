//! Configuration types for redirection.
//!
//! This module provides:
//! - `StreamRole`: Which of the three standard streams is managed
//! - `RedirectOptions`: Per-session knobs such as `no_close`

mod options;
mod role;

pub use options::RedirectOptions;
pub use role::StreamRole;
