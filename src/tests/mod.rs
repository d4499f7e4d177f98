//! Internal unit tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::io::StdioStream;

mod config;
mod error;
mod io;

static SERIAL: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the process-wide slots.
pub(crate) fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn same_stream(a: &Arc<dyn StdioStream>, b: &Arc<dyn StdioStream>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
