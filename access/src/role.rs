//! Portal roles and the allowed-role sets attached to routes and menu entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// One of the three role-scoped portals a user can operate in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    ClinicStaff,
    PhoOfficial,
    LabPersonnel,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::ClinicStaff, Role::PhoOfficial, Role::LabPersonnel];

    /// Wire/storage representation (`clinic-staff`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::ClinicStaff => "clinic-staff",
            Role::PhoOfficial => "pho-official",
            Role::LabPersonnel => "lab-personnel",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::ClinicStaff => "Clinic Staff",
            Role::PhoOfficial => "PHO Official",
            Role::LabPersonnel => "Lab Personnel",
        }
    }

    /// Title of the portal this role lands in after login.
    #[must_use]
    pub fn portal_title(self) -> &'static str {
        match self {
            Role::ClinicStaff => "Clinic Portal",
            Role::PhoOfficial => "Public Health Portal",
            Role::LabPersonnel => "Laboratory Portal",
        }
    }

    /// Interpret a persisted role value.
    ///
    /// Empty and unrecognised values both mean "no role". Readers never
    /// substitute a default role for a missing one.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse() {
            Ok(role) => Some(role),
            Err(e) => {
                log::warn!("ignoring stored role: {e}");
                None
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clinic-staff" => Ok(Role::ClinicStaff),
            "pho-official" => Ok(Role::PhoOfficial),
            "lab-personnel" => Ok(Role::LabPersonnel),
            other => Err(AccessError::UnknownRole(other.to_owned())),
        }
    }
}

/// Ordered, duplicate-free set of roles.
///
/// An empty set is unrestricted: it permits every role, including "no role".
/// Guards check authentication separately, so an empty set on a guarded route
/// still means "any authenticated user".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    #[must_use]
    pub fn any() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn of(roles: &[Role]) -> Self {
        roles.iter().copied().collect()
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Whether `role` passes this set. Unrestricted sets pass everything.
    #[must_use]
    pub fn permits(&self, role: Option<Role>) -> bool {
        self.is_unrestricted() || role.is_some_and(|r| self.contains(r))
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut roles = Vec::new();
        for role in iter {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        Self(roles)
    }
}

impl From<&[Role]> for RoleSet {
    fn from(roles: &[Role]) -> Self {
        Self::of(roles)
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;
