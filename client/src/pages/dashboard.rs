//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any authenticated role may land here, including a session with no
//! recognised role. Role denials elsewhere redirect to this page, so it must
//! never be role-restricted itself.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use access::{NavItem, NavManifest, Role};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::portal_layout::PortalLayout;
use crate::state::auth::use_auth;
use crate::state::portal::use_nav_manifest;

/// Menu entries for `role`, minus the dashboard itself.
pub(crate) fn quick_links(manifest: &NavManifest, role: Option<Role>, dashboard_path: &str) -> Vec<NavItem> {
    manifest
        .filter(role)
        .into_iter()
        .flat_map(|section| section.items)
        .filter(|item| item.path != dashboard_path)
        .collect()
}

pub(crate) fn greeting(role: Option<Role>) -> String {
    match role {
        Some(role) => format!("Welcome to the {}.", role.portal_title()),
        None => "Your account has no portal assigned. Contact an administrator.".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let manifest = use_nav_manifest();
    let dashboard_path = auth.config().dashboard_path;

    view! {
        <PortalLayout title="Dashboard">
            <p class="dashboard__greeting">{move || greeting(auth.role())}</p>
            <div class="dashboard__links">
                {move || {
                    quick_links(&manifest, auth.role(), &dashboard_path)
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="dashboard__card">
                                    <A href=item.path>{item.label}</A>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </PortalLayout>
    }
}
