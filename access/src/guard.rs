//! Route guards: an ordered chain of predicates yielding a navigation decision.
//!
//! ARCHITECTURE
//! ============
//! A [`GuardChain`] always evaluates the authentication guard before any role
//! guard, whatever order it was built in, so role checks never run against an
//! anonymous session. Readiness is checked before either: while the auth
//! context has not consulted storage the chain answers [`Decision::Pending`]
//! and callers render a neutral placeholder instead of redirecting.
//!
//! Denials are decisions, not errors. An unauthenticated visitor is sent to
//! the login route with the requested location attached; an authenticated
//! user lacking the role is sent silently to the dashboard.

use crate::auth::AuthSnapshot;
use crate::config::AccessConfig;
use crate::role::RoleSet;

/// Query parameter carrying the originally requested location to `/login`.
pub const REDIRECT_PARAM: &str = "redirect";

/// Conceptual guard state for one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Pending,
    Unauthenticated,
    AuthenticatedUnauthorized,
    Authorized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// No session; sent to login.
    Unauthenticated,
    /// Session role not allowed; sent to the dashboard.
    Forbidden,
    /// Already signed in while visiting the login route.
    AlreadyAuthenticated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    /// Target route.
    pub to: String,
    pub reason: RedirectReason,
    /// Location the user originally asked for, when it should be restored
    /// after login.
    pub from: Option<String>,
}

impl Redirect {
    /// Target URL with the redirect-back location encoded as a query parameter.
    #[must_use]
    pub fn href(&self) -> String {
        match &self.from {
            Some(from) => format!("{}?{REDIRECT_PARAM}={}", self.to, urlencoding::encode(from)),
            None => self.to.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Auth state not loaded yet; render nothing decisive.
    Pending,
    Allow,
    Redirect(Redirect),
}

impl Decision {
    #[must_use]
    pub fn state(&self) -> GuardState {
        match self {
            Decision::Pending => GuardState::Pending,
            Decision::Allow => GuardState::Authorized,
            Decision::Redirect(r) => match r.reason {
                RedirectReason::Unauthenticated => GuardState::Unauthenticated,
                RedirectReason::Forbidden | RedirectReason::AlreadyAuthenticated => {
                    GuardState::AuthenticatedUnauthorized
                }
            },
        }
    }

    #[must_use]
    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Decision::Redirect(r) => Some(r),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Requires a non-empty session token.
    Authenticated,
    /// Requires the session role to be in the set. An empty set admits any
    /// authenticated role.
    Roles(RoleSet),
}

impl Guard {
    fn rank(&self) -> u8 {
        match self {
            Guard::Authenticated => 0,
            Guard::Roles(_) => 1,
        }
    }

    fn check(&self, auth: &AuthSnapshot, requested: &str, config: &AccessConfig) -> Option<Redirect> {
        match self {
            Guard::Authenticated if !auth.is_authenticated => Some(Redirect {
                to: config.login_path.clone(),
                reason: RedirectReason::Unauthenticated,
                from: Some(requested.to_owned()),
            }),
            Guard::Roles(allowed) if !allowed.permits(auth.role) => {
                log::debug!("role {:?} not permitted for {requested}", auth.role);
                Some(Redirect { to: config.dashboard_path.clone(), reason: RedirectReason::Forbidden, from: None })
            }
            _ => None,
        }
    }
}

/// Guards attached to one route, normalised into evaluation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuardChain {
    guards: Vec<Guard>,
}

impl GuardChain {
    /// Build a chain. A role guard implies the authentication guard, which
    /// is added if absent; authentication always sorts first.
    pub fn new(guards: impl IntoIterator<Item = Guard>) -> Self {
        let mut ordered: Vec<Guard> = Vec::new();
        for guard in guards {
            if !ordered.contains(&guard) {
                ordered.push(guard);
            }
        }
        let has_roles = ordered.iter().any(|g| matches!(g, Guard::Roles(_)));
        if has_roles && !ordered.contains(&Guard::Authenticated) {
            ordered.push(Guard::Authenticated);
        }
        ordered.sort_by_key(Guard::rank);
        Self { guards: ordered }
    }

    /// No guards; always allowed, even before auth state is ready.
    #[must_use]
    pub fn public() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn authenticated() -> Self {
        Self::new([Guard::Authenticated])
    }

    #[must_use]
    pub fn roles(allowed: impl Into<RoleSet>) -> Self {
        Self::new([Guard::Roles(allowed.into())])
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.guards.is_empty()
    }

    #[must_use]
    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    /// Decide whether `requested` may render for `auth`.
    #[must_use]
    pub fn evaluate(&self, auth: &AuthSnapshot, requested: &str, config: &AccessConfig) -> Decision {
        if self.is_public() {
            return Decision::Allow;
        }
        if !auth.is_ready {
            return Decision::Pending;
        }
        self.guards
            .iter()
            .find_map(|guard| guard.check(auth, requested, config))
            .map_or(Decision::Allow, Decision::Redirect)
    }
}

/// Resolve where to go after login from a raw `redirect` query value.
///
/// Only same-origin absolute paths are honoured; anything else, or a loop
/// back to the login route, falls back to the dashboard. Control characters
/// are rejected because browsers strip tab and newlines while parsing, which
/// can turn `/\t/host` into the protocol-relative `//host`.
#[must_use]
pub fn redirect_target(raw: Option<&str>, config: &AccessConfig) -> String {
    let decoded = raw.and_then(|value| urlencoding::decode(value).ok());
    match decoded.as_deref() {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control)
                && !is_same_route(path, &config.login_path) =>
        {
            path.to_owned()
        }
        _ => config.dashboard_path.clone(),
    }
}

fn is_same_route(path: &str, route: &str) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    bare.trim_end_matches('/') == route.trim_end_matches('/')
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
