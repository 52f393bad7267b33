//! Config-backed role checker.

use mentorship_types::RoleChecker;

/// Grants the "admin" role to the identities listed in configuration.
///
/// Stands in for the program's external identity provider; the handlers
/// only ever see the `RoleChecker` capability, so swapping this for a
/// real session-backed implementation touches nothing else.
pub struct ConfigRoleChecker {
    admins: Vec<String>,
}

impl ConfigRoleChecker {
    pub fn new(admins: Vec<String>) -> Self {
        Self { admins }
    }
}

impl RoleChecker for ConfigRoleChecker {
    fn is_in_role(&self, identity: &str, role: &str) -> bool {
        role == "admin" && self.admins.iter().any(|a| a == identity)
    }
}
