//! Patient management pages: search, enrollment, and record detail.
//!
//! Route registration restricts these to clinic staff and lab personnel
//! (enrollment to clinic staff only); the pages assume the guards passed.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::portal_layout::PortalLayout;

/// Search box contents reduced to a comparable query.
pub(crate) fn normalize_search(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

#[component]
pub fn PatientSearchPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let normalized = move || normalize_search(&query.get());

    view! {
        <PortalLayout title="Search Patients">
            <input
                class="search-input"
                type="search"
                placeholder="Name, mobile number or ABHA ID"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show
                when=move || !normalized().is_empty()
                fallback=|| view! { <p class="placeholder">"Enter a search term to look up patient records."</p> }
            >
                <p class="placeholder">"No records match \"" {normalized} "\"."</p>
            </Show>
        </PortalLayout>
    }
}

#[component]
pub fn PatientEnrollPage() -> impl IntoView {
    view! {
        <PortalLayout title="Enroll Patient">
            <p class="placeholder">"Register a new patient and issue a health card."</p>
        </PortalLayout>
    }
}

#[component]
pub fn PatientDetailPage() -> impl IntoView {
    let params = use_params_map();
    let patient_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <PortalLayout title="Patient Record">
            <p class="patient__id">"Patient " {patient_id}</p>
            <A href=access::routes::paths::PATIENT_SEARCH>"Back to search"</A>
        </PortalLayout>
    }
}
