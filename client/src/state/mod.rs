//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session and routing rules live in the UI-agnostic `access` crate; these
//! modules only adapt them to Leptos context and signals.

pub mod auth;
pub mod portal;
pub mod routes;
