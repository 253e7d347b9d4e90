//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared auth handle from Leptos context; pages compose
//! them inside the guard components.

pub mod auth_provider;
pub mod guards;
pub mod nav_menu;
pub mod portal_layout;
