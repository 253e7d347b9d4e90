//! Shared route table for route-aware components.

use std::sync::Arc;

use access::{AccessConfig, AccessError, RouteTable};
use leptos::prelude::*;

/// Build the portal route table for `config` and provide it to descendants.
///
/// # Panics
///
/// Panics if `config` produces an inconsistent table; the app cannot route
/// safely without one.
pub fn provide_routes(config: AccessConfig) -> Arc<RouteTable> {
    let table = match RouteTable::portal(config) {
        Ok(table) => Arc::new(table),
        Err(e) => panic!("{e}"),
    };
    provide_context(Arc::clone(&table));
    table
}

pub fn try_use_routes() -> Result<Arc<RouteTable>, AccessError> {
    use_context::<Arc<RouteTable>>().ok_or(AccessError::ProviderMissing)
}

/// # Panics
///
/// Panics when called outside an `AuthProvider` subtree.
pub fn use_routes() -> Arc<RouteTable> {
    match try_use_routes() {
        Ok(table) => table,
        Err(e) => panic!("{e}: wrap the view in <AuthProvider>"),
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
