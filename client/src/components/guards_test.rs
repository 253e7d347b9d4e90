#![cfg(not(feature = "hydrate"))]

use access::routes::allowed;
use access::{AccessConfig, RedirectReason};

use super::*;
use crate::state::auth::provide_auth;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

#[cfg(feature = "ssr")]
fn records() -> ChildrenFn {
    std::sync::Arc::new(|| view! { <p class="records">"patient records"</p> }.into_any())
}

// =============================================================================
// before the session is loaded
// =============================================================================

#[test]
fn protected_route_is_pending_before_initialize() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = provide_auth(AccessConfig::default());
        let decision = decide(auth, &GuardChain::authenticated(), "/dashboard");
        assert_eq!(decision, Decision::Pending);
    });
}

#[test]
fn role_route_is_pending_before_initialize() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = provide_auth(AccessConfig::default());
        let decision = decide(auth, &GuardChain::roles(allowed::ANALYTICS), "/analytics");
        assert_eq!(decision, Decision::Pending);
    });
}

// Server rendering only produces markup with the `ssr` feature.
#[cfg(feature = "ssr")]
#[test]
fn pending_renders_placeholder_not_children() {
    let owner = Owner::new();
    owner.with(|| {
        let html = render_decision(Decision::Pending, &records()).to_html();
        assert!(html.contains("guard-pending"), "{html}");
        assert!(!html.contains("patient records"), "{html}");
    });
}

#[cfg(feature = "ssr")]
#[test]
fn allow_renders_children() {
    let owner = Owner::new();
    owner.with(|| {
        let html = render_decision(Decision::Allow, &records()).to_html();
        assert!(html.contains("patient records"), "{html}");
        assert!(!html.contains("guard-pending"), "{html}");
    });
}

// =============================================================================
// after the session is loaded
// =============================================================================

#[test]
fn anonymous_session_is_sent_to_login_with_location() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = provide_auth(AccessConfig::default());
        auth.initialize();
        let decision = decide(auth, &GuardChain::authenticated(), "/patients/search?q=ravi");
        let redirect = decision.redirect().unwrap();
        assert_eq!(redirect.reason, RedirectReason::Unauthenticated);
        assert_eq!(redirect.href(), "/login?redirect=%2Fpatients%2Fsearch%3Fq%3Dravi");
    });
}

#[test]
fn role_route_without_auth_guard_still_requires_login() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = provide_auth(AccessConfig::default());
        auth.initialize();
        let decision = decide(auth, &GuardChain::roles(allowed::LAB), "/lab/results");
        assert_eq!(decision.redirect().unwrap().to, "/login");
    });
}

#[test]
fn wrong_role_is_sent_to_dashboard() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = provide_auth(AccessConfig::default());
        auth.initialize();
        auth.login("tok".into(), Some(Role::LabPersonnel), None);
        let decision = decide(auth, &GuardChain::roles(allowed::ANALYTICS), "/analytics");
        let redirect = decision.redirect().unwrap();
        assert_eq!(redirect.reason, RedirectReason::Forbidden);
        assert_eq!(redirect.href(), "/dashboard");
    });
}

#[test]
fn permitted_role_is_allowed() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = provide_auth(AccessConfig::default());
        auth.initialize();
        auth.login("tok".into(), Some(Role::ClinicStaff), None);
        assert_eq!(decide(auth, &GuardChain::roles(allowed::PATIENT_RECORDS), "/patients/P-1"), Decision::Allow);
        assert_eq!(decide(auth, &GuardChain::authenticated(), "/dashboard"), Decision::Allow);
    });
}
