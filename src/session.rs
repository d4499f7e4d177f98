//! Scoped redirection sessions.
//!
//! A [`RedirectSession`] is the public unit of redirection: entering one
//! installs the role's proxy (if needed) and registers the caller's stream
//! for the current thread; dropping it undoes both, on every exit path.

use std::marker::PhantomData;
use std::sync::Arc;

use paste::paste;

use crate::config::{RedirectOptions, StreamRole};
use crate::error::RedirectError;
use crate::io::StdioStream;
use crate::proxy::{Override, StreamProxy};
use crate::registry;

/// Guard for one active redirection on the current thread.
///
/// Sessions for the same role on the same thread stack: the inner session
/// shadows the outer one and hands it back when it ends. Guards must be
/// dropped in reverse order of creation; dropping them out of order leaves
/// the thread's routing unspecified.
///
/// The guard is `!Send` because the registration lives in the entering
/// thread's local storage.
#[must_use = "the redirection ends as soon as the session is dropped"]
#[derive(Debug)]
pub struct RedirectSession {
    role: StreamRole,
    proxy: Arc<StreamProxy>,
    shadowed: Option<Override>,
    active: bool,
    _not_send: PhantomData<*const ()>,
}

impl RedirectSession {
    /// Redirect `role` to `stream` for the current thread.
    pub fn enter(
        role: StreamRole,
        stream: Arc<dyn StdioStream>,
        options: RedirectOptions,
    ) -> Self {
        let proxy = registry::acquire(role);
        let shadowed = proxy.register(stream, options.no_close);
        Self {
            role,
            proxy,
            shadowed,
            active: true,
            _not_send: PhantomData,
        }
    }

    /// The redirected role.
    pub fn role(&self) -> StreamRole {
        self.role
    }

    /// The proxy serving this session.
    pub fn proxy(&self) -> &Arc<StreamProxy> {
        &self.proxy
    }

    /// End the session, reporting bookkeeping failures.
    ///
    /// Dropping the session does the same but can only log them.
    pub fn finish(mut self) -> Result<(), RedirectError> {
        self.exit()
    }

    fn exit(&mut self) -> Result<(), RedirectError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.proxy.unregister();
        if let Some(outer) = self.shadowed.take() {
            self.proxy.register_override(outer);
        }
        registry::release(self.role)
    }
}

impl Drop for RedirectSession {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            tracing::error!(role = %self.role, error = %e, "failed to end redirection session");
        }
    }
}

macro_rules! redirect_fns {
    ($($name:ident => $role:ident, $what:literal;)*) => {
        paste! {
            $(
                #[doc = concat!("Redirect ", $what, " to `stream` for the current thread.")]
                ///
                /// `close` on the redirected stream only flushes `stream`.
                pub fn [<redirect_ $name>](stream: Arc<dyn StdioStream>) -> RedirectSession {
                    RedirectSession::enter(StreamRole::$role, stream, RedirectOptions::default())
                }

                #[doc = concat!("Redirect ", $what, " to `stream` with explicit options.")]
                pub fn [<redirect_ $name _with>](
                    stream: Arc<dyn StdioStream>,
                    options: RedirectOptions,
                ) -> RedirectSession {
                    RedirectSession::enter(StreamRole::$role, stream, options)
                }
            )*
        }
    };
}

redirect_fns! {
    input => Input, "standard input";
    output => Output, "standard output";
    error => Error, "standard error";
}
