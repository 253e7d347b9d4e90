//! In-memory auth context bridging the session store to readers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once per application load and shared by handle. The Leptos
//! client keeps it inside a single `RwSignal` so every mutation replaces the
//! whole record in one update; guards and menus read [`AuthSnapshot`]s.
//!
//! TRADE-OFFS
//! ==========
//! Login and logout are synchronous on memory and best-effort on storage:
//! a failed write is logged and the in-memory change stands.

use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::config::AccessConfig;
use crate::role::Role;
use crate::session::{Session, SessionStore};
use crate::storage::KeyValueStore;

/// Owned view of the auth state handed to guards, menus and pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuthSnapshot {
    pub token: String,
    pub role: Option<Role>,
    pub email: String,
    pub is_ready: bool,
    pub is_authenticated: bool,
}

/// Session state plus the readiness flag, backed by a [`SessionStore`].
#[derive(Debug)]
pub struct AuthContext<S, C = SystemClock> {
    store: SessionStore<S, C>,
    config: AccessConfig,
    session: Session,
    ready: bool,
}

impl<S: KeyValueStore, C: Clock> AuthContext<S, C> {
    /// Create a context that has not yet consulted storage.
    pub fn new(store: SessionStore<S, C>, config: AccessConfig) -> Self {
        Self { store, config, session: Session::default(), ready: false }
    }

    /// Load the persisted session once and mark the context ready.
    ///
    /// Subsequent calls are no-ops, so re-running the initializing effect
    /// cannot clobber a login that happened after the first load.
    pub fn initialize(&mut self) {
        if self.ready {
            log::debug!("auth context already initialized");
            return;
        }
        let mut session = self.store.read();
        if session.is_authenticated() && self.idle_expired() {
            log::info!("persisted session exceeded idle timeout, discarding");
            if let Err(e) = self.store.clear() {
                log::warn!("failed to clear expired session: {e}");
            }
            session = Session::default();
        }
        log::debug!(
            "auth context ready (authenticated: {}, role: {:?})",
            session.is_authenticated(),
            session.role
        );
        self.session = session;
        self.ready = true;
    }

    fn idle_expired(&self) -> bool {
        let Some(timeout) = self.config.idle_timeout_ms else {
            return false;
        };
        self.store
            .last_activity()
            .is_some_and(|last| self.store.now_ms().saturating_sub(last) > timeout)
    }

    /// Start a session. `role` defaults to clinic staff; this is the only
    /// place a default role is applied.
    ///
    /// A missing or blank `email` keeps the current identity label, as
    /// happens with OTP logins that yield no email.
    pub fn login(&mut self, token: impl Into<String>, role: Option<Role>, email: Option<&str>) {
        let token = token.into();
        if token.trim().is_empty() {
            log::warn!("login called with an empty token; ignoring");
            return;
        }
        let role = role.unwrap_or(Role::ClinicStaff);
        let supplied = email.map(str::trim).unwrap_or_default();
        let email = if supplied.is_empty() {
            if self.session.email.is_empty() { self.store.read().email } else { self.session.email.clone() }
        } else {
            supplied.to_owned()
        };

        if let Err(e) = self.store.write(&token, role, supplied) {
            log::warn!("failed to persist session: {e}");
        }
        self.session = Session { token, role: Some(role), email };
        log::debug!("logged in as {role}");
    }

    /// End the session. Calling this repeatedly is harmless.
    pub fn logout(&mut self) {
        self.session = Session::default();
        if let Err(e) = self.store.clear() {
            log::warn!("failed to clear persisted session: {e}");
        }
        log::debug!("logged out");
    }

    /// Refresh the last-activity marker for an authenticated session.
    pub fn touch(&self) {
        if !self.is_authenticated() {
            return;
        }
        if let Err(e) = self.store.touch() {
            log::warn!("failed to record activity: {e}");
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Derived from the token on every call; never stored separately.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    pub fn store(&self) -> &SessionStore<S, C> {
        &self.store
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            token: self.session.token.clone(),
            role: self.session.role,
            email: self.session.email.clone(),
            is_ready: self.ready,
            is_authenticated: self.is_authenticated(),
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
