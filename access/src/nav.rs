//! Navigation manifest and role-based menu pruning.
//!
//! The filter is a pure function of `(manifest, role)`: it keeps original
//! ordering, drops items the role may not use, and drops any section left
//! with no visible items.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::role::{Role, RoleSet};
use crate::routes::{allowed, paths};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    /// Empty means every role that can see the section.
    #[serde(default)]
    pub roles: RoleSet,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>, roles: impl Into<RoleSet>) -> Self {
        Self { label: label.into(), path: path.into(), roles: roles.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub title: String,
    #[serde(default)]
    pub roles: RoleSet,
    pub items: Vec<NavItem>,
}

impl NavSection {
    pub fn new(title: impl Into<String>, roles: impl Into<RoleSet>, items: Vec<NavItem>) -> Self {
        Self { title: title.into(), roles: roles.into(), items }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavManifest {
    sections: Vec<NavSection>,
}

impl NavManifest {
    #[must_use]
    pub fn new(sections: Vec<NavSection>) -> Self {
        Self { sections }
    }

    /// Parse a manifest from a JSON array of sections.
    pub fn from_json(raw: &str) -> Result<Self, AccessError> {
        serde_json::from_str(raw).map_err(AccessError::Manifest)
    }

    /// Menu shipped with the portal.
    #[must_use]
    pub fn portal_default() -> Self {
        Self::new(vec![
            NavSection::new(
                "Overview",
                RoleSet::any(),
                vec![NavItem::new("Dashboard", paths::DASHBOARD, RoleSet::any())],
            ),
            NavSection::new(
                "Patient Management",
                allowed::PATIENT_RECORDS,
                vec![
                    NavItem::new("Search Patients", paths::PATIENT_SEARCH, RoleSet::any()),
                    NavItem::new("Enroll Patient", paths::PATIENT_ENROLL, allowed::ENROLLMENT),
                    NavItem::new("Scan Health Card", paths::SCAN, allowed::SCAN),
                ],
            ),
            NavSection::new(
                "Laboratory",
                allowed::LAB,
                vec![NavItem::new("Test Results", paths::LAB_RESULTS, RoleSet::any())],
            ),
            NavSection::new(
                "Public Health",
                allowed::ANALYTICS,
                vec![NavItem::new("Analytics", paths::ANALYTICS, RoleSet::any())],
            ),
        ])
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Sections and items visible to `role`, in manifest order.
    #[must_use]
    pub fn filter(&self, role: Option<Role>) -> Vec<NavSection> {
        self.sections
            .iter()
            .filter(|section| section.roles.permits(role))
            .filter_map(|section| {
                let items: Vec<NavItem> =
                    section.items.iter().filter(|item| item.roles.permits(role)).cloned().collect();
                (!items.is_empty()).then(|| NavSection { title: section.title.clone(), roles: section.roles.clone(), items })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
