#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// Provider lookup
// =============================================================

#[test]
fn try_use_auth_outside_provider_is_an_error() {
    let owner = Owner::new();
    owner.with(|| {
        assert!(matches!(try_use_auth(), Err(AccessError::ProviderMissing)));
    });
}

#[test]
#[should_panic(expected = "AuthProvider")]
fn use_auth_outside_provider_panics() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = use_auth();
    });
}

#[test]
fn use_auth_inside_provider_returns_shared_handle() {
    let owner = Owner::new();
    owner.with(|| {
        let provided = provide_auth(AccessConfig::default());
        let found = use_auth();
        found.login("tok".into(), Some(Role::PhoOfficial), None);
        assert_eq!(provided.snapshot_untracked().role, Some(Role::PhoOfficial));
    });
}

// =============================================================
// AuthHandle
// =============================================================

#[test]
fn handle_starts_not_ready() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthHandle::new(AccessConfig::default());
        let snap = auth.snapshot_untracked();
        assert!(!snap.is_ready);
        assert!(!snap.is_authenticated);
    });
}

#[test]
fn initialize_without_browser_storage_is_ready_and_logged_out() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthHandle::new(AccessConfig::default());
        auth.initialize();
        let snap = auth.snapshot_untracked();
        assert!(snap.is_ready);
        assert!(!snap.is_authenticated);
        assert_eq!(snap.role, None);
    });
}

#[test]
fn login_applies_in_memory_even_when_persistence_fails() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthHandle::new(AccessConfig::default());
        auth.initialize();
        auth.login("tok".into(), None, Some("nurse@example.org"));
        let snap = auth.snapshot_untracked();
        assert!(snap.is_authenticated);
        assert_eq!(snap.role, Some(Role::ClinicStaff));
        assert_eq!(snap.email, "nurse@example.org");
    });
}

#[test]
fn logout_resets_session_but_stays_ready() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = AuthHandle::new(AccessConfig::default());
        auth.initialize();
        auth.login("tok".into(), Some(Role::LabPersonnel), None);
        auth.logout();
        auth.logout();
        let snap = auth.snapshot_untracked();
        assert!(snap.is_ready);
        assert!(!snap.is_authenticated);
        assert_eq!(snap.token, "");
        assert_eq!(snap.role, None);
    });
}
