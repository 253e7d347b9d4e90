//! Authenticated page chrome: portal header, role menu, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page renders inside this layout, which also keeps the
//! session's last-activity marker fresh as the user moves between routes.

use access::Role;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_menu::NavMenu;
use crate::state::auth::use_auth;
use crate::util::auth::install_activity_tracker;

/// Header text for the current session: portal name and identity.
pub(crate) fn identity_line(role: Option<Role>, email: &str) -> String {
    let role_label = role.map_or("No portal assigned", Role::label);
    if email.is_empty() { role_label.to_owned() } else { format!("{role_label} · {email}") }
}

#[component]
pub fn PortalLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    install_activity_tracker(auth);

    let portal = move || auth.role().map_or("Healthcare Portal", Role::portal_title);
    let identity = move || {
        let snap = auth.snapshot();
        identity_line(snap.role, &snap.email)
    };

    let on_logout = move |_| {
        let login_path = auth.config().login_path;
        navigate(&login_path, NavigateOptions::default());
        auth.logout();
    };

    view! {
        <div class="portal">
            <header class="portal__header">
                <span class="portal__title">{portal}</span>
                <span class="portal__identity">{identity}</span>
                <button class="portal__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <aside class="portal__nav">
                <NavMenu/>
            </aside>
            <main class="portal__main">
                <h1>{title}</h1>
                {children()}
            </main>
        </div>
    }
}

#[cfg(test)]
#[path = "portal_layout_test.rs"]
mod portal_layout_test;
