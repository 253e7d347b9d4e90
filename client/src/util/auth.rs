//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the portal shell need identical answers to "where did the
//! user ask to go?" and "when was the session last used?".

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthHandle;

/// Rebuild the requested location from router path and query parts.
///
/// The router may report the query with or without its leading `?`.
pub fn requested_location(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}

/// Current router location including its query string (tracked).
pub fn current_location() -> impl Fn() -> String + Clone + Send + Sync + 'static {
    let location = use_location();
    move || requested_location(&location.pathname.get(), &location.search.get())
}

/// Refresh the session's last-activity marker whenever the route changes.
pub fn install_activity_tracker(auth: AuthHandle) {
    let location = use_location();
    Effect::new(move || {
        let _ = location.pathname.get();
        auth.touch();
    });
}
