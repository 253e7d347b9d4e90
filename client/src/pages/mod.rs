//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates chrome to
//! `components::portal_layout`. Access control happens in the route tree,
//! not in the pages.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod patients;
pub mod workspaces;
