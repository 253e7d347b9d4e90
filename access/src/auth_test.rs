use std::sync::Arc;

use super::*;
use crate::clock::ManualClock;
use crate::session::{AUXILIARY_KEYS, EMAIL_KEY, LAST_ACTIVITY_KEY, ROLE_KEY, TOKEN_KEY};
use crate::storage::MemoryStorage;

type TestContext = AuthContext<Arc<MemoryStorage>, Arc<ManualClock>>;

fn context(storage: &Arc<MemoryStorage>, clock: &Arc<ManualClock>, config: AccessConfig) -> TestContext {
    AuthContext::new(SessionStore::new(Arc::clone(storage), Arc::clone(clock)), config)
}

fn fresh() -> (Arc<MemoryStorage>, Arc<ManualClock>, TestContext) {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(ManualClock::new(1_000));
    let ctx = context(&storage, &clock, AccessConfig::default());
    (storage, clock, ctx)
}

// =============================================================================
// initialization
// =============================================================================

#[test]
fn new_context_is_not_ready() {
    let (_, _, ctx) = fresh();
    let snap = ctx.snapshot();
    assert!(!snap.is_ready);
    assert!(!snap.is_authenticated);
}

#[test]
fn initialize_loads_persisted_session_and_marks_ready() {
    let storage = Arc::new(MemoryStorage::with_entries([
        (TOKEN_KEY, "tok"),
        (ROLE_KEY, "pho-official"),
        (EMAIL_KEY, "pho@example.org"),
    ]));
    let clock = Arc::new(ManualClock::new(0));
    let mut ctx = context(&storage, &clock, AccessConfig::default());
    ctx.initialize();

    assert_eq!(
        ctx.snapshot(),
        AuthSnapshot {
            token: "tok".into(),
            role: Some(Role::PhoOfficial),
            email: "pho@example.org".into(),
            is_ready: true,
            is_authenticated: true,
        }
    );
}

#[test]
fn initialize_runs_only_once() {
    let (storage, _, mut ctx) = fresh();
    ctx.initialize();
    ctx.login("tok", Some(Role::LabPersonnel), Some("lab@example.org"));
    storage.remove(TOKEN_KEY).unwrap();

    ctx.initialize();
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.role(), Some(Role::LabPersonnel));
}

#[test]
fn initialize_keeps_unset_role_unset() {
    let storage = Arc::new(MemoryStorage::with_entries([(TOKEN_KEY, "tok")]));
    let clock = Arc::new(ManualClock::new(0));
    let mut ctx = context(&storage, &clock, AccessConfig::default());
    ctx.initialize();
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.role(), None);
}

// =============================================================================
// login
// =============================================================================

#[test]
fn login_updates_memory_and_storage() {
    let (storage, _, mut ctx) = fresh();
    ctx.initialize();
    ctx.login("tok", Some(Role::LabPersonnel), Some("lab@example.org"));

    assert!(ctx.is_authenticated());
    assert_eq!(ctx.session(), &Session::new("tok", Some(Role::LabPersonnel), "lab@example.org"));
    assert_eq!(ctx.store().read(), ctx.session().clone());
    assert_eq!(storage.get(ROLE_KEY).unwrap().as_deref(), Some("lab-personnel"));
}

#[test]
fn login_without_role_defaults_to_clinic_staff() {
    let (_, _, mut ctx) = fresh();
    ctx.login("tok", None, None);
    assert_eq!(ctx.role(), Some(Role::ClinicStaff));
}

#[test]
fn login_without_email_keeps_previous_identity() {
    let storage = Arc::new(MemoryStorage::with_entries([(EMAIL_KEY, "old@example.org")]));
    let clock = Arc::new(ManualClock::new(0));
    let mut ctx = context(&storage, &clock, AccessConfig::default());
    ctx.initialize();
    ctx.login("otp-token", Some(Role::ClinicStaff), Some("  "));

    assert_eq!(ctx.session().email, "old@example.org");
    assert_eq!(ctx.store().read().email, "old@example.org");
}

#[test]
fn login_with_blank_token_is_ignored() {
    let (storage, _, mut ctx) = fresh();
    ctx.initialize();
    ctx.login("   ", Some(Role::PhoOfficial), Some("x@y.z"));
    assert!(!ctx.is_authenticated());
    assert_eq!(ctx.role(), None);
    assert!(storage.entries().is_empty());
}

#[test]
fn login_survives_reload() {
    let (storage, clock, mut ctx) = fresh();
    ctx.initialize();
    ctx.login("tok", Some(Role::PhoOfficial), Some("pho@example.org"));

    let mut reloaded = context(&storage, &clock, AccessConfig::default());
    reloaded.initialize();
    assert_eq!(reloaded.session(), ctx.session());
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn logout_clears_memory_and_storage() {
    let (storage, _, mut ctx) = fresh();
    ctx.initialize();
    ctx.login("tok", Some(Role::ClinicStaff), Some("a@b.org"));
    storage.set("mhrs-user-role", "clinic-staff").unwrap();
    ctx.logout();

    assert_eq!(ctx.session(), &Session::default());
    assert_eq!(ctx.store().read(), Session::default());
    for key in AUXILIARY_KEYS {
        assert!(!storage.contains(key));
    }
    assert!(ctx.is_ready());
}

#[test]
fn logout_twice_matches_logout_once() {
    let (storage, _, mut ctx) = fresh();
    ctx.initialize();
    ctx.login("tok", Some(Role::ClinicStaff), Some("a@b.org"));
    ctx.logout();
    let once = (ctx.snapshot(), storage.entries());
    ctx.logout();
    assert_eq!((ctx.snapshot(), storage.entries()), once);
}

// =============================================================================
// idle expiry
// =============================================================================

#[test]
fn initialize_discards_idle_expired_session() {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(ManualClock::new(10_000));
    let config = AccessConfig::default().with_idle_timeout_ms(60_000);

    let mut first = context(&storage, &clock, config.clone());
    first.initialize();
    first.login("tok", Some(Role::ClinicStaff), Some("a@b.org"));

    clock.advance(60_001);
    let mut second = context(&storage, &clock, config);
    second.initialize();

    assert!(second.is_ready());
    assert!(!second.is_authenticated());
    assert!(!storage.contains(TOKEN_KEY));
}

#[test]
fn touch_extends_idle_window() {
    let storage = Arc::new(MemoryStorage::new());
    let clock = Arc::new(ManualClock::new(0));
    let config = AccessConfig::default().with_idle_timeout_ms(60_000);

    let mut ctx = context(&storage, &clock, config.clone());
    ctx.initialize();
    ctx.login("tok", Some(Role::ClinicStaff), None);
    clock.advance(50_000);
    ctx.touch();
    clock.advance(50_000);

    let mut reloaded = context(&storage, &clock, config);
    reloaded.initialize();
    assert!(reloaded.is_authenticated());
}

#[test]
fn touch_is_noop_without_session() {
    let (storage, _, mut ctx) = fresh();
    ctx.initialize();
    ctx.touch();
    assert!(!storage.contains(LAST_ACTIVITY_KEY));
}

#[test]
fn idle_expiry_disabled_by_default() {
    let (storage, clock, mut ctx) = fresh();
    ctx.initialize();
    ctx.login("tok", Some(Role::ClinicStaff), None);
    clock.advance(u64::from(u32::MAX));

    let mut reloaded = context(&storage, &clock, AccessConfig::default());
    reloaded.initialize();
    assert!(reloaded.is_authenticated());
}
