use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-side route paths that role dispatch and access decisions resolve to.
pub mod paths {
    pub const HOME: &str = "/";
    pub const SIGN_IN: &str = "/auth";
    pub const DONOR_DASHBOARD: &str = "/donor/dashboard";
    pub const ORPHANAGE_ADMIN_DASHBOARD: &str = "/orphanage-admin/dashboard";
    pub const SUPER_ADMIN_DASHBOARD: &str = "/admin/dashboard";
}

/// Platform role carried by every authenticated user.
///
/// - `Donor` — browses orphanages, donates, sees their own history.
/// - `OrphanageAdmin` — manages one orphanage (`User::orphanage_id`).
/// - `SuperAdmin` — verifies orphanages and monitors all transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Donor,
    OrphanageAdmin,
    SuperAdmin,
}

/// Every role, in display order.
pub const ALL_ROLES: &[Role] = &[Role::Donor, Role::OrphanageAdmin, Role::SuperAdmin];

impl Role {
    /// Parse the wire form (`DONOR`, `ORPHANAGE_ADMIN`, `SUPER_ADMIN`).
    /// Anything else is `None`; callers treat it as "no role".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "DONOR" => Some(Role::Donor),
            "ORPHANAGE_ADMIN" => Some(Role::OrphanageAdmin),
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "DONOR",
            Role::OrphanageAdmin => "ORPHANAGE_ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Donor => "Donor",
            Role::OrphanageAdmin => "Orphanage Admin",
            Role::SuperAdmin => "Super Admin",
        }
    }

    /// Default dashboard for this role.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Donor => paths::DONOR_DASHBOARD,
            Role::OrphanageAdmin => paths::ORPHANAGE_ADMIN_DASHBOARD,
            Role::SuperAdmin => paths::SUPER_ADMIN_DASHBOARD,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the landing page for an optional role. Total: a missing role
/// lands on the home page.
pub fn landing_path(role: Option<Role>) -> &'static str {
    role.map(|r| r.landing_path()).unwrap_or(paths::HOME)
}
