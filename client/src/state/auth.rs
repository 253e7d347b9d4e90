//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthHandle`] is created by `AuthProvider` and shared through Leptos
//! context. It wraps the access layer's `AuthContext` in a single `RwSignal`,
//! so login and logout replace the whole session record in one update and
//! every reader (guards, menus, pages) re-renders from the same snapshot.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{AccessConfig, AccessError, AuthContext, AuthSnapshot, Role, SessionStore};
use leptos::prelude::*;

use crate::util::clock::BrowserClock;
use crate::util::storage::LocalStorage;

/// Access-layer auth context backed by browser storage.
pub type PortalAuth = AuthContext<LocalStorage, BrowserClock>;

/// Copyable handle to the shared auth state.
#[derive(Clone, Copy, Debug)]
pub struct AuthHandle {
    state: RwSignal<PortalAuth>,
}

impl AuthHandle {
    pub fn new(config: AccessConfig) -> Self {
        let store = SessionStore::new(LocalStorage, BrowserClock);
        Self { state: RwSignal::new(AuthContext::new(store, config)) }
    }

    /// Load the persisted session. Only the first call has any effect.
    pub fn initialize(self) {
        self.state.update(|ctx| ctx.initialize());
    }

    /// Current state; tracked, so reactive closures re-run on change.
    pub fn snapshot(self) -> AuthSnapshot {
        self.state.with(|ctx| ctx.snapshot())
    }

    pub fn snapshot_untracked(self) -> AuthSnapshot {
        self.state.with_untracked(|ctx| ctx.snapshot())
    }

    pub fn role(self) -> Option<Role> {
        self.state.with(|ctx| ctx.role())
    }

    pub fn login(self, token: String, role: Option<Role>, email: Option<&str>) {
        self.state.update(|ctx| ctx.login(token, role, email));
    }

    pub fn logout(self) {
        self.state.update(|ctx| ctx.logout());
    }

    /// Record activity without notifying readers.
    pub fn touch(self) {
        self.state.with_untracked(|ctx| ctx.touch());
    }

    pub fn config(self) -> AccessConfig {
        self.state.with_untracked(|ctx| ctx.config().clone())
    }
}

/// Create the tab's auth handle and provide it to descendants.
pub fn provide_auth(config: AccessConfig) -> AuthHandle {
    let handle = AuthHandle::new(config);
    provide_context(handle);
    handle
}

/// Shared auth handle, or `ProviderMissing` outside an `AuthProvider`.
pub fn try_use_auth() -> Result<AuthHandle, AccessError> {
    use_context::<AuthHandle>().ok_or(AccessError::ProviderMissing)
}

/// Shared auth handle.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider` subtree. That is an
/// integration bug, so it fails loudly instead of yielding an empty session.
pub fn use_auth() -> AuthHandle {
    match try_use_auth() {
        Ok(handle) => handle,
        Err(e) => panic!("{e}: wrap the view in <AuthProvider>"),
    }
}
