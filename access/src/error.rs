//! Error types for storage and access-layer integration failures.
//!
//! Authorization denials are not errors here: they are expressed as
//! [`crate::guard::Decision::Redirect`]. Only integration mistakes (such as
//! reading auth state outside its provider) are meant to escape to callers.

/// Failure reported by a [`crate::storage::KeyValueStore`] backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage exists in this environment (SSR, disabled storage, private mode).
    #[error("key-value storage is unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, security error, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The in-memory backend's lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Errors surfaced by the access layer.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// Auth state was requested outside of an `AuthProvider` subtree.
    #[error("auth context accessed outside of AuthProvider")]
    ProviderMissing,
    /// Persisting or clearing the session failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// A role string did not name a known portal role.
    #[error("unknown role: {0}")]
    UnknownRole(String),
    /// A navigation manifest could not be parsed.
    #[error("invalid navigation manifest: {0}")]
    Manifest(#[source] serde_json::Error),
    /// Access configuration or route registration is inconsistent.
    #[error("invalid access config: {0}")]
    Config(String),
}
