//! Persisted session record and its key-value store.
//!
//! DESIGN
//! ======
//! Key-value storage has no transactions, so the token acts as the commit
//! marker: `write` removes it first and sets it last, and `clear` removes it
//! first. A reader therefore never sees a token paired with another
//! session's role.
//!
//! TRADE-OFFS
//! ==========
//! `read` never fails. Missing, corrupted or inaccessible storage degrades to
//! an empty session, which callers treat as "logged out".

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::StorageError;
use crate::role::Role;
use crate::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "authToken";
pub const ROLE_KEY: &str = "userRole";
pub const EMAIL_KEY: &str = "userEmail";
pub const AUTH_TIMESTAMP_KEY: &str = "authTimestamp";
pub const LAST_ACTIVITY_KEY: &str = "lastActivity";
pub const LEGACY_ROLE_KEY: &str = "mhrs-user-role";

/// Bookkeeping keys removed together with the session on logout.
pub const AUXILIARY_KEYS: [&str; 3] = [AUTH_TIMESTAMP_KEY, LAST_ACTIVITY_KEY, LEGACY_ROLE_KEY];

/// Who is acting, and as what.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token; empty means no session.
    pub token: String,
    pub role: Option<Role>,
    /// Identity label (email, phone or ABHA id). Never used for authorization.
    pub email: String,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, role: Option<Role>, email: impl Into<String>) -> Self {
        Self { token: token.into(), role, email: email.into() }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Role in its stored form; empty when no role is set.
    #[must_use]
    pub fn role_str(&self) -> &'static str {
        self.role.map_or("", Role::as_str)
    }
}

/// Session persistence over a [`KeyValueStore`].
#[derive(Debug)]
pub struct SessionStore<S, C = SystemClock> {
    backend: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> SessionStore<S, C> {
    pub fn new(backend: S, clock: C) -> Self {
        Self { backend, clock }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Load the persisted session, degrading to an empty one on any failure.
    pub fn read(&self) -> Session {
        match self.try_read() {
            Ok(session) => session,
            Err(e) => {
                log::warn!("session storage unreadable, treating as logged out: {e}");
                Session::default()
            }
        }
    }

    fn try_read(&self) -> Result<Session, StorageError> {
        let token = self.backend.get(TOKEN_KEY)?.unwrap_or_default();
        let role = self.backend.get(ROLE_KEY)?.as_deref().and_then(Role::from_stored);
        let email = self.backend.get(EMAIL_KEY)?.unwrap_or_default();
        Ok(Session { token, role, email })
    }

    /// Persist a session. An empty `email` leaves any stored identity label
    /// in place.
    pub fn write(&self, token: &str, role: Role, email: &str) -> Result<(), StorageError> {
        self.backend.remove(TOKEN_KEY)?;
        self.backend.set(ROLE_KEY, role.as_str())?;
        if !email.is_empty() {
            self.backend.set(EMAIL_KEY, email)?;
        }
        let now = self.clock.now_ms().to_string();
        self.backend.set(AUTH_TIMESTAMP_KEY, &now)?;
        self.backend.set(LAST_ACTIVITY_KEY, &now)?;
        self.backend.set(TOKEN_KEY, token)
    }

    /// Remove the session and all auxiliary keys.
    ///
    /// Every key is attempted even if an earlier removal fails; the first
    /// failure is returned.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_err = None;
        for key in [TOKEN_KEY, ROLE_KEY, EMAIL_KEY].into_iter().chain(AUXILIARY_KEYS) {
            if let Err(e) = self.backend.remove(key) {
                log::warn!("failed to remove {key} from session storage: {e}");
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Record activity now.
    pub fn touch(&self) -> Result<(), StorageError> {
        self.backend.set(LAST_ACTIVITY_KEY, &self.clock.now_ms().to_string())
    }

    /// Last recorded activity, if present and parseable.
    pub fn last_activity(&self) -> Option<u64> {
        self.backend
            .get(LAST_ACTIVITY_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse().ok())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
