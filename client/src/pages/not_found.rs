//! Fallback for paths the router does not know.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let home = use_auth().config().dashboard_path;

    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <A href=home>"Go to dashboard"</A>
        </div>
    }
}
