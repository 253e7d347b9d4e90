use super::*;

#[test]
fn provided_table_is_found_by_descendants() {
    let owner = Owner::new();
    owner.with(|| {
        let provided = provide_routes(AccessConfig::default());
        let found = use_routes();
        assert!(Arc::ptr_eq(&provided, &found));
    });
}

#[test]
fn missing_table_is_provider_error() {
    let owner = Owner::new();
    owner.with(|| {
        assert!(matches!(try_use_routes(), Err(AccessError::ProviderMissing)));
    });
}

#[test]
#[should_panic(expected = "login_path")]
fn invalid_config_panics() {
    let owner = Owner::new();
    owner.with(|| {
        let config = AccessConfig { login_path: "login".into(), ..AccessConfig::default() };
        let _ = provide_routes(config);
    });
}
