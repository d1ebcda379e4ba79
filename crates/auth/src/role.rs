//! Role enumeration.

use serde::{Deserialize, Serialize};

/// Role held by a console user.
///
/// The set is closed: the console has exactly these five roles, and every
/// permission table is keyed by them. Seniority comparisons go through
/// [`crate::AccessPolicy::has_minimum_role`], not this type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Supervisor,
    Accountant,
    Warehouse,
    Installer,
}

impl Role {
    /// All roles, in descending seniority order.
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Supervisor,
        Role::Accountant,
        Role::Warehouse,
        Role::Installer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Supervisor => "supervisor",
            Role::Accountant => "accountant",
            Role::Warehouse => "warehouse",
            Role::Installer => "installer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
