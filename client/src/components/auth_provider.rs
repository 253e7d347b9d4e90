//! Root provider for the shared auth handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage is consulted once, from an effect. Effects only run in the browser
//! after hydration, so the server render and the first client render both see
//! a not-ready context and guards show their placeholder instead of a
//! redirect that storage might have contradicted.

use access::AccessConfig;
use leptos::prelude::*;

use crate::state::auth::provide_auth;
use crate::state::routes::provide_routes;

#[component]
pub fn AuthProvider(#[prop(optional)] config: Option<AccessConfig>, children: Children) -> impl IntoView {
    let config = config.unwrap_or_default();
    provide_routes(config.clone());
    let auth = provide_auth(config);
    Effect::new(move || auth.initialize());
    children()
}
