//! Sidebar navigation pruned to the current role.

use access::NavManifest;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;
use crate::state::portal::use_nav_manifest;

#[component]
pub fn NavMenu(#[prop(optional)] manifest: Option<NavManifest>) -> impl IntoView {
    let auth = use_auth();
    let manifest = manifest.unwrap_or_else(use_nav_manifest);
    let sections = Memo::new(move |_| manifest.filter(auth.role()));

    view! {
        <nav class="nav-menu">
            {move || {
                sections
                    .get()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <div class="nav-menu__section">
                                <h3 class="nav-menu__title">{section.title}</h3>
                                <ul class="nav-menu__items">
                                    {section
                                        .items
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <li>
                                                    <A href=item.path>{item.label}</A>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
