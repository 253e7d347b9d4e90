//! Role-based access control for the healthcare portal.
//!
//! This crate is UI-framework agnostic. The Leptos client wraps
//! [`auth::AuthContext`] in a reactive signal, while tests and the SSR host
//! drive the same types directly without mounting a view tree.
//!
//! ARCHITECTURE
//! ============
//! `storage` (key-value backend) -> `session` (persisted record) ->
//! `auth` (in-memory context with readiness) -> `guard` / `routes`
//! (navigation decisions) and `nav` (menu pruning).

pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod guard;
pub mod nav;
pub mod role;
pub mod routes;
pub mod session;
pub mod storage;

pub use auth::{AuthContext, AuthSnapshot};
pub use config::AccessConfig;
pub use error::{AccessError, StorageError};
pub use guard::{Decision, Guard, GuardChain, GuardState, Redirect, RedirectReason};
pub use nav::{NavItem, NavManifest, NavSection};
pub use role::{Role, RoleSet};
pub use routes::{Navigation, RouteSpec, RouteTable};
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStore, MemoryStorage};
