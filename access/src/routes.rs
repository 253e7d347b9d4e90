//! Static route table: named paths with guard chains declared at registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos router renders views; this table is the authoritative answer to
//! "may this session see this path?" The client's route tree uses the same
//! path and role constants, and tests use the table to check the menu never
//! links somewhere its viewer would be bounced from.

use std::collections::BTreeMap;

use crate::auth::AuthSnapshot;
use crate::config::AccessConfig;
use crate::error::AccessError;
use crate::guard::{Decision, Guard, GuardChain, REDIRECT_PARAM, Redirect, RedirectReason, redirect_target};
use crate::role::Role;

/// Route paths of the portal.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = crate::config::DEFAULT_LOGIN_PATH;
    pub const DASHBOARD: &str = crate::config::DEFAULT_DASHBOARD_PATH;
    pub const PATIENT_SEARCH: &str = "/patients/search";
    pub const PATIENT_ENROLL: &str = "/patients/enroll";
    pub const PATIENT_DETAIL: &str = "/patients/:id";
    pub const SCAN: &str = "/scan";
    pub const LAB_RESULTS: &str = "/lab/results";
    pub const ANALYTICS: &str = "/analytics";
}

/// Allowed-role sets for restricted routes.
pub mod allowed {
    use crate::role::Role;

    pub const PATIENT_RECORDS: &[Role] = &[Role::ClinicStaff, Role::LabPersonnel];
    pub const ENROLLMENT: &[Role] = &[Role::ClinicStaff];
    pub const SCAN: &[Role] = &[Role::ClinicStaff];
    pub const LAB: &[Role] = &[Role::LabPersonnel];
    pub const ANALYTICS: &[Role] = &[Role::PhoOfficial];
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// One registered route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub name: String,
    pub pattern: String,
    pub guards: GuardChain,
    segments: Vec<Segment>,
}

impl RouteSpec {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, guards: GuardChain) -> Self {
        let pattern = pattern.into();
        let segments = split_segments(&pattern)
            .map(|s| match s.strip_prefix(':') {
                Some(param) => Segment::Param(param.to_owned()),
                None => Segment::Static(s.to_owned()),
            })
            .collect();
        Self { name: name.into(), pattern, guards, segments }
    }

    pub fn public(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(name, pattern, GuardChain::public())
    }

    pub fn protected(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(name, pattern, GuardChain::authenticated())
    }

    pub fn restricted(name: impl Into<String>, pattern: impl Into<String>, roles: &[Role]) -> Self {
        Self::new(name, pattern, GuardChain::roles(roles))
    }

    /// Match a normalised path, returning captured parameters.
    fn capture(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let parts: Vec<&str> = split_segments(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_owned());
                }
            }
        }
        Some(params)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteSpec,
    pub params: BTreeMap<String, String>,
}

/// Outcome of navigating to a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation<'a> {
    Render(RouteMatch<'a>),
    Pending,
    Redirect(Redirect),
    NotFound,
}

#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteSpec>,
    config: AccessConfig,
}

impl RouteTable {
    /// Register routes.
    ///
    /// # Errors
    ///
    /// Fails if patterns repeat, the login route is missing or guarded, or
    /// the dashboard route is missing or role-restricted (a role denial
    /// redirects there, so restricting it could loop).
    pub fn new(routes: Vec<RouteSpec>, config: AccessConfig) -> Result<Self, AccessError> {
        config.validate()?;
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|r| r.segments == route.segments) {
                return Err(AccessError::Config(format!("duplicate route pattern {}", route.pattern)));
            }
        }
        let table = Self { routes, config };
        match table.resolve(&table.config.login_path) {
            Some(m) if m.route.guards.is_public() => {}
            Some(_) => return Err(AccessError::Config("login route must be public".into())),
            None => return Err(AccessError::Config("login route is not registered".into())),
        }
        match table.resolve(&table.config.dashboard_path) {
            Some(m) if m.route.guards.guards().iter().all(|g| *g == Guard::Authenticated) => {}
            Some(_) => return Err(AccessError::Config("dashboard route must not be role-restricted".into())),
            None => return Err(AccessError::Config("dashboard route is not registered".into())),
        }
        Ok(table)
    }

    /// The portal's route tree.
    pub fn portal(config: AccessConfig) -> Result<Self, AccessError> {
        Self::new(
            vec![
                RouteSpec::public("login", config.login_path.clone()),
                RouteSpec::protected("home", paths::HOME),
                RouteSpec::protected("dashboard", config.dashboard_path.clone()),
                RouteSpec::restricted("patient-search", paths::PATIENT_SEARCH, allowed::PATIENT_RECORDS),
                RouteSpec::restricted("patient-enroll", paths::PATIENT_ENROLL, allowed::ENROLLMENT),
                RouteSpec::restricted("patient-detail", paths::PATIENT_DETAIL, allowed::PATIENT_RECORDS),
                RouteSpec::restricted("scan", paths::SCAN, allowed::SCAN),
                RouteSpec::restricted("lab-results", paths::LAB_RESULTS, allowed::LAB),
                RouteSpec::restricted("analytics", paths::ANALYTICS, allowed::ANALYTICS),
            ],
            config,
        )
    }

    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Find the route for `path`, ignoring query, fragment and trailing slashes.
    /// Static routes win over parameterised ones.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let bare = strip_query(path).0;
        let mut param_match = None;
        for route in &self.routes {
            let Some(params) = route.capture(bare) else {
                continue;
            };
            if params.is_empty() {
                return Some(RouteMatch { route, params });
            }
            if param_match.is_none() {
                param_match = Some(RouteMatch { route, params });
            }
        }
        param_match
    }

    /// Resolve `path` and run its guard chain against `auth`.
    ///
    /// `path` may carry a query string; it is preserved as the redirect-back
    /// location when login is required.
    pub fn navigate(&self, path: &str, auth: &AuthSnapshot) -> Navigation<'_> {
        let Some(found) = self.resolve(path) else {
            return Navigation::NotFound;
        };
        if found.route.guards.is_public() && found.route.pattern == self.config.login_path {
            if auth.is_ready && auth.is_authenticated {
                let raw = query_param(strip_query(path).1, REDIRECT_PARAM);
                return Navigation::Redirect(Redirect {
                    to: redirect_target(raw, &self.config),
                    reason: RedirectReason::AlreadyAuthenticated,
                    from: None,
                });
            }
            return Navigation::Render(found);
        }
        match found.route.guards.evaluate(auth, path, &self.config) {
            Decision::Allow => Navigation::Render(found),
            Decision::Pending => Navigation::Pending,
            Decision::Redirect(r) => Navigation::Redirect(r),
        }
    }
}

/// Split `path` into the bare path and its query string (without `?`).
fn strip_query(path: &str) -> (&str, &str) {
    let without_fragment = path.split('#').next().unwrap_or(path);
    match without_fragment.split_once('?') {
        Some((bare, query)) => (bare, query),
        None => (without_fragment, ""),
    }
}

/// First value for `name` in a raw, undecoded query string. The value is
/// returned still percent-encoded (`+` is not treated as a space); callers
/// decode it, as `redirect_target` does.
fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(key, value)| (key == name).then_some(value))
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
