//! Process-wide stream slots and the proxy installer.
//!
//! Each role has one slot holding the handle that unaware code talks to.
//! The registry swaps the slot to the role's [`StreamProxy`] on the first
//! `acquire` and back to the original on the last `release`. All
//! bookkeeping for the three roles sits behind one mutex; the slots
//! themselves are read through a per-role `RwLock` so the I/O path never
//! touches the registry mutex.

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, RwLock};

use crate::config::StreamRole;
use crate::error::RedirectError;
use crate::io::{PlatformStderr, PlatformStdin, PlatformStdout, StdioStream};
use crate::proxy::StreamProxy;

type Slot = RwLock<Arc<dyn StdioStream>>;

static SLOTS: LazyLock<[Slot; 3]> = LazyLock::new(|| {
    [
        RwLock::new(Arc::new(PlatformStdin::new()) as Arc<dyn StdioStream>),
        RwLock::new(Arc::new(PlatformStdout::new()) as Arc<dyn StdioStream>),
        RwLock::new(Arc::new(PlatformStderr::new()) as Arc<dyn StdioStream>),
    ]
});

static REGISTRY: LazyLock<Mutex<Registry>> = LazyLock::new(|| Mutex::new(Registry::default()));

#[derive(Debug, Default)]
struct RoleEntry {
    original: Option<Arc<dyn StdioStream>>,
    proxy: Option<Arc<StreamProxy>>,
    use_count: u32,
    installs: u64,
    restores: u64,
}

#[derive(Debug, Default)]
struct Registry {
    entries: [RoleEntry; 3],
}

/// Snapshot of a role's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleStats {
    /// Number of active sessions.
    pub use_count: u32,
    /// How many times the proxy has been swapped in.
    pub installs: u64,
    /// How many times the original has been swapped back.
    pub restores: u64,
}

fn registry() -> MutexGuard<'static, Registry> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

fn slot(role: StreamRole) -> &'static Slot {
    &SLOTS[role.index()]
}

fn store(role: StreamRole, handle: Arc<dyn StdioStream>) -> Arc<dyn StdioStream> {
    let mut guard = slot(role).write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, handle)
}

/// The role's current process-wide handle.
///
/// This is the proxy while any session is active, the original otherwise.
pub fn current(role: StreamRole) -> Arc<dyn StdioStream> {
    let guard = slot(role).read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Start using the role's proxy, installing it if this is the first user.
///
/// The original handle is captured the first time the role is acquired
/// (or again after [`replace`]) and the proxy is reused across cycles.
pub fn acquire(role: StreamRole) -> Arc<StreamProxy> {
    let mut reg = registry();
    let entry = &mut reg.entries[role.index()];

    let proxy = match entry.proxy.clone() {
        Some(proxy) => proxy,
        None => {
            let original = entry
                .original
                .get_or_insert_with(|| current(role))
                .clone();
            let proxy = Arc::new(StreamProxy::new(role, original));
            entry.proxy = Some(Arc::clone(&proxy));
            proxy
        }
    };

    if entry.use_count == 0 {
        store(role, proxy.clone());
        entry.installs += 1;
        tracing::debug!(%role, installs = entry.installs, "installed stream proxy");
    }

    entry.use_count += 1;
    proxy
}

/// Stop using the role's proxy, restoring the original on the last release.
pub fn release(role: StreamRole) -> Result<(), RedirectError> {
    let mut reg = registry();
    let entry = &mut reg.entries[role.index()];

    if entry.use_count == 0 {
        return Err(RedirectError::UnbalancedRelease { role });
    }

    entry.use_count -= 1;
    if entry.use_count == 0 {
        if let Some(original) = &entry.original {
            store(role, Arc::clone(original));
        }
        entry.restores += 1;
        tracing::debug!(%role, restores = entry.restores, "restored original stream");
    }
    Ok(())
}

/// Replace the role's process-wide handle, returning the previous one.
///
/// Only allowed while no session is active for the role. The next
/// [`acquire`] captures `handle` as the new original and wraps it in a
/// fresh proxy.
pub fn replace(
    role: StreamRole,
    handle: Arc<dyn StdioStream>,
) -> Result<Arc<dyn StdioStream>, RedirectError> {
    let mut reg = registry();
    let entry = &mut reg.entries[role.index()];

    if entry.use_count > 0 {
        return Err(RedirectError::RoleBusy {
            role,
            use_count: entry.use_count,
        });
    }

    entry.original = None;
    entry.proxy = None;
    tracing::debug!(%role, stream = %handle.id(), "replaced process-wide stream");
    Ok(store(role, handle))
}

/// Whether the role's proxy is currently installed.
pub fn is_installed(role: StreamRole) -> bool {
    registry().entries[role.index()].use_count > 0
}

/// Bookkeeping counters for the role.
pub fn stats(role: StreamRole) -> RoleStats {
    let reg = registry();
    let entry = &reg.entries[role.index()];
    RoleStats {
        use_count: entry.use_count,
        installs: entry.installs,
        restores: entry.restores,
    }
}
