use super::*;

// =============================================================================
// email
// =============================================================================

#[test]
fn email_login_trims_and_requires_both_fields() {
    assert_eq!(validate_email_login("  nurse@clinic.in ", "secret"), Ok("nurse@clinic.in".to_owned()));
    assert_eq!(validate_email_login("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_email_login("nurse@clinic.in", ""), Err("Enter both email and password."));
}

#[test]
fn email_login_rejects_malformed_addresses() {
    for bad in ["nurse", "@clinic.in", "nurse@clinic", "nurse@.in", "nurse@clinic.", "a@b@c.in"] {
        assert_eq!(validate_email_login(bad, "pw"), Err("Enter a valid email address."), "{bad}");
    }
}

// =============================================================================
// otp
// =============================================================================

#[test]
fn otp_login_accepts_formatted_phone_numbers() {
    assert_eq!(validate_otp_login("98765-43210", "123456"), Ok(()));
    assert_eq!(validate_otp_login(" 98765 43210 ", " 123456 "), Ok(()));
}

#[test]
fn otp_login_checks_phone_before_code() {
    assert_eq!(validate_otp_login("12345", "12"), Err("Enter a 10-digit mobile number."));
    assert_eq!(validate_otp_login("98765abcde", "123456"), Err("Enter a 10-digit mobile number."));
    assert_eq!(validate_otp_login("9876543210", "12345"), Err("Enter the 6-digit OTP."));
    assert_eq!(validate_otp_login("9876543210", "12a456"), Err("Enter the 6-digit OTP."));
}

// =============================================================================
// abha
// =============================================================================

#[test]
fn abha_is_normalized_to_grouped_form() {
    assert_eq!(normalize_abha("12345678901234"), Ok("12-3456-7890-1234".to_owned()));
    assert_eq!(normalize_abha("12-3456-7890-1234"), Ok("12-3456-7890-1234".to_owned()));
}

#[test]
fn abha_requires_fourteen_digits() {
    assert!(normalize_abha("1234567890123").is_err());
    assert!(normalize_abha("123456789012345").is_err());
    assert!(normalize_abha("12-3456-7890-12x4").is_err());
}

// =============================================================================
// submit
// =============================================================================

#[test]
fn identity_depends_on_method() {
    let fields = LoginFields {
        email: "lab@clinic.in".into(),
        password: "pw".into(),
        phone: "9876543210".into(),
        otp: "654321".into(),
        abha: "12345678901234".into(),
    };
    assert_eq!(identity_for(LoginMethod::Email, &fields), Ok(Some("lab@clinic.in".to_owned())));
    assert_eq!(identity_for(LoginMethod::Otp, &fields), Ok(None));
    assert_eq!(identity_for(LoginMethod::Abha, &fields), Ok(Some("12-3456-7890-1234".to_owned())));
}

#[test]
fn identity_reports_validation_error_of_selected_method_only() {
    let fields = LoginFields { phone: "9876543210".into(), otp: "654321".into(), ..LoginFields::default() };
    assert_eq!(identity_for(LoginMethod::Otp, &fields), Ok(None));
    assert_eq!(identity_for(LoginMethod::Email, &fields), Err("Enter both email and password."));
}

#[test]
fn mock_tokens_are_unique_and_tagged() {
    let a = mock_token(LoginMethod::Otp);
    let b = mock_token(LoginMethod::Otp);
    assert!(a.starts_with("mock-otp-"));
    assert_ne!(a, b);
}

#[test]
fn blank_or_unknown_role_choice_is_none() {
    assert_eq!(parse_role_choice("pho-official"), Some(Role::PhoOfficial));
    assert_eq!(parse_role_choice(""), None);
    assert_eq!(parse_role_choice("admin"), None);
}

#[test]
fn preferences_round_trip_through_storage() {
    let store = access::MemoryStorage::new();
    let prefs = LoginPreferences { method: LoginMethod::Abha, role: Some(Role::LabPersonnel) };
    save_json(&store, PREFERENCES_KEY, &prefs);
    assert_eq!(load_json::<LoginPreferences>(&store, PREFERENCES_KEY), Some(prefs));
}
