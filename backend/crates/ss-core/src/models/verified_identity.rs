use crate::Role;

use serde::{Deserialize, Serialize};

/// Identity returned by the external verifier. Never persisted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifiedIdentity {
    pub subject_id: String,
    pub email: String,
    pub email_verified: bool,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Roles granted at the provider through custom claims
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl VerifiedIdentity {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
