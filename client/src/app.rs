//! Root application component with routing and the auth provider.
//!
//! ARCHITECTURE
//! ============
//! Access rules are attached where routes are registered: every route below
//! the login page is wrapped in `ProtectedRoute`, and restricted ones add a
//! `RoleRoute` carrying the same allowed-role set the `access` route table
//! registers for that path. Static `/patients/*` routes are listed before
//! the `/patients/:id` parameter route.

use access::routes::allowed;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::guards::{ProtectedRoute, RoleRoute};
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::patients::{PatientDetailPage, PatientEnrollPage, PatientSearchPage};
use crate::pages::workspaces::{AnalyticsPage, LabResultsPage, ScanPage};
use crate::state::portal::{access_config, provide_nav_manifest};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_nav_manifest();

    view! {
        <Stylesheet id="leptos" href="/pkg/medportal.css"/>
        <Title text="MedPortal"/>

        <AuthProvider config=access_config()>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("patients"), StaticSegment("search"))
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <RoleRoute allowed=allowed::PATIENT_RECORDS>
                                        <PatientSearchPage/>
                                    </RoleRoute>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("patients"), StaticSegment("enroll"))
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <RoleRoute allowed=allowed::ENROLLMENT>
                                        <PatientEnrollPage/>
                                    </RoleRoute>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("patients"), ParamSegment("id"))
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <RoleRoute allowed=allowed::PATIENT_RECORDS>
                                        <PatientDetailPage/>
                                    </RoleRoute>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("scan")
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <RoleRoute allowed=allowed::SCAN>
                                        <ScanPage/>
                                    </RoleRoute>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("lab"), StaticSegment("results"))
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <RoleRoute allowed=allowed::LAB>
                                        <LabResultsPage/>
                                    </RoleRoute>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("analytics")
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <RoleRoute allowed=allowed::ANALYTICS>
                                        <AnalyticsPage/>
                                    </RoleRoute>
                                </ProtectedRoute>
                            }
                        }
                    />
                </Routes>
            </Router>
        </AuthProvider>
    }
}
