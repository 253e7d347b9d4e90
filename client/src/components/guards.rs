//! Route guard components.
//!
//! ARCHITECTURE
//! ============
//! Both components delegate to `access::GuardChain`, so the decision logic is
//! the same one the route table and tests use. Nest them as
//! `<ProtectedRoute><RoleRoute allowed=..>..</RoleRoute></ProtectedRoute>`;
//! a `RoleRoute` on its own still requires login first.

use access::{Decision, GuardChain, Role};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::{AuthHandle, use_auth};
use crate::util::auth::current_location;

/// Neutral content shown while the session has not been loaded yet.
#[component]
pub fn GuardPlaceholder() -> impl IntoView {
    view! { <div class="guard-pending" aria-busy="true"></div> }
}

/// Renders `children` only for an authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardChain::authenticated(), children)
}

/// Renders `children` only when the session role is in `allowed`.
/// An empty `allowed` admits any authenticated role.
#[component]
pub fn RoleRoute(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    guarded(GuardChain::roles(allowed), children)
}

fn guarded(chain: GuardChain, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = current_location();

    move || render_decision(decide(auth, &chain, &location()), &children)
}

/// Run `chain` against the current session for `requested` (tracked).
pub(crate) fn decide(auth: AuthHandle, chain: &GuardChain, requested: &str) -> Decision {
    chain.evaluate(&auth.snapshot(), requested, &auth.config())
}

pub(crate) fn render_decision(decision: Decision, children: &ChildrenFn) -> AnyView {
    match &decision {
        Decision::Pending => view! { <GuardPlaceholder/> }.into_any(),
        Decision::Allow => children(),
        Decision::Redirect(redirect) => {
            log::debug!("guard {:?} ({:?}) -> {}", decision.state(), redirect.reason, redirect.to);
            view! { <Redirect path=redirect.href()/> }.into_any()
        }
    }
}

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;
