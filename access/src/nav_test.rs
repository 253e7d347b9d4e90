use super::*;

fn titles(sections: &[NavSection]) -> Vec<&str> {
    sections.iter().map(|s| s.title.as_str()).collect()
}

fn labels(section: &NavSection) -> Vec<&str> {
    section.items.iter().map(|i| i.label.as_str()).collect()
}

// =============================================================================
// filter
// =============================================================================

#[test]
fn lab_personnel_sees_patient_management_without_clinic_only_item() {
    let manifest = NavManifest::new(vec![NavSection::new(
        "Patient Management",
        [Role::ClinicStaff, Role::LabPersonnel],
        vec![
            NavItem::new("Search Patients", "/patients/search", RoleSet::any()),
            NavItem::new("Enroll Patient", "/patients/enroll", [Role::ClinicStaff]),
        ],
    )]);

    let visible = manifest.filter(Some(Role::LabPersonnel));
    assert_eq!(titles(&visible), vec!["Patient Management"]);
    assert_eq!(labels(&visible[0]), vec!["Search Patients"]);
}

#[test]
fn section_with_no_visible_items_is_omitted() {
    let manifest = NavManifest::new(vec![NavSection::new(
        "Patient Management",
        RoleSet::any(),
        vec![NavItem::new("Enroll Patient", "/patients/enroll", [Role::ClinicStaff])],
    )]);
    assert!(manifest.filter(Some(Role::PhoOfficial)).is_empty());
}

#[test]
fn filter_preserves_manifest_order() {
    let visible = NavManifest::portal_default().filter(Some(Role::ClinicStaff));
    assert_eq!(titles(&visible), vec!["Overview", "Patient Management"]);
    assert_eq!(labels(&visible[1]), vec!["Search Patients", "Enroll Patient", "Scan Health Card"]);
}

#[test]
fn each_role_sees_its_portal_sections() {
    let manifest = NavManifest::portal_default();
    assert_eq!(titles(&manifest.filter(Some(Role::PhoOfficial))), vec!["Overview", "Public Health"]);
    assert_eq!(titles(&manifest.filter(Some(Role::LabPersonnel))), vec!["Overview", "Patient Management", "Laboratory"]);
}

#[test]
fn no_role_sees_only_unrestricted_entries() {
    assert_eq!(titles(&NavManifest::portal_default().filter(None)), vec!["Overview"]);
}

#[test]
fn filter_is_pure() {
    let manifest = NavManifest::portal_default();
    let before = manifest.clone();
    assert_eq!(manifest.filter(Some(Role::ClinicStaff)), manifest.filter(Some(Role::ClinicStaff)));
    assert_eq!(manifest, before);
}

// =============================================================================
// from_json
// =============================================================================

#[test]
fn from_json_parses_sections_with_optional_roles() {
    let manifest = NavManifest::from_json(
        r#"[
            {"title": "Overview", "items": [{"label": "Dashboard", "path": "/dashboard"}]},
            {"title": "Public Health", "roles": ["pho-official"],
             "items": [{"label": "Analytics", "path": "/analytics"}]}
        ]"#,
    )
    .unwrap();
    assert_eq!(manifest.sections().len(), 2);
    assert!(manifest.sections()[0].roles.is_unrestricted());
    assert_eq!(titles(&manifest.filter(Some(Role::ClinicStaff))), vec!["Overview"]);
}

#[test]
fn from_json_rejects_unknown_role() {
    let err = NavManifest::from_json(r#"[{"title": "X", "roles": ["admin"], "items": []}]"#).unwrap_err();
    assert!(matches!(err, AccessError::Manifest(_)));
}
