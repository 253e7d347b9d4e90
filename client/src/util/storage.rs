//! Browser `localStorage` backend for the access layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`LocalStorage`] implements `access::KeyValueStore` so the session store can
//! persist across reloads. Outside the `hydrate` build there is no browser
//! storage: every call reports `StorageError::Unavailable`, which the session
//! store degrades to "logged out".

use access::{KeyValueStore, StorageError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Handle to `window.localStorage`. Looked up on every call, so the handle
/// itself is zero-sized and freely shareable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Load a JSON value for `key`. Missing, unreadable or malformed entries are `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value for `key`, best-effort.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    if let Err(e) = store.set(key, &raw) {
        log::debug!("could not persist {key}: {e}");
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
