//! Role-specific workspaces: health card scanning, lab results, analytics.

use leptos::prelude::*;

use crate::components::portal_layout::PortalLayout;

#[component]
pub fn ScanPage() -> impl IntoView {
    view! {
        <PortalLayout title="Scan Health Card">
            <p class="placeholder">"Hold the patient's health card QR code up to the camera."</p>
        </PortalLayout>
    }
}

#[component]
pub fn LabResultsPage() -> impl IntoView {
    view! {
        <PortalLayout title="Test Results">
            <p class="placeholder">"Pending and completed laboratory results appear here."</p>
        </PortalLayout>
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <PortalLayout title="Analytics">
            <p class="placeholder">"District-level disease surveillance and vaccination coverage."</p>
        </PortalLayout>
    }
}
