//! Portal settings shipped with the client bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Access paths, idle timeout and the sidebar menu are JSON files embedded
//! at build time. A file that fails to parse or validate is logged and the
//! built-in defaults are used, so a bad edit degrades the portal instead of
//! blanking it. The Leptos route tree registers `/login` and `/dashboard`
//! literally; the shipped config must keep those paths.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use access::{AccessConfig, NavManifest};
use leptos::prelude::*;

pub(crate) const ACCESS_CONFIG_JSON: &str = include_str!("../../assets/access.json");
pub(crate) const NAV_MANIFEST_JSON: &str = include_str!("../../assets/nav.json");

pub fn load_access_config(raw: &str) -> AccessConfig {
    AccessConfig::from_json(raw).unwrap_or_else(|e| {
        log::error!("access config rejected, using defaults: {e}");
        AccessConfig::default()
    })
}

pub fn load_nav_manifest(raw: &str) -> NavManifest {
    NavManifest::from_json(raw).unwrap_or_else(|e| {
        log::error!("nav manifest rejected, using defaults: {e}");
        NavManifest::portal_default()
    })
}

/// Shipped access config.
pub fn access_config() -> AccessConfig {
    load_access_config(ACCESS_CONFIG_JSON)
}

/// Provide the shipped menu to descendants.
pub fn provide_nav_manifest() {
    provide_context(load_nav_manifest(NAV_MANIFEST_JSON));
}

/// Menu from context, or the built-in one outside `App`.
pub fn use_nav_manifest() -> NavManifest {
    use_context::<NavManifest>().unwrap_or_else(NavManifest::portal_default)
}
