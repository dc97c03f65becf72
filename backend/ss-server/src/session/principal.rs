use ss_core::{LocalUser, Role, UserProfile, VerifiedIdentity};

use uuid::Uuid;

/// Authenticated caller, resolved once per request
#[derive(Debug, Clone)]
pub struct Principal {
    pub user: LocalUser,
    pub profile: UserProfile,
    pub identity: VerifiedIdentity,
    pub roles: Vec<Role>,
}

impl Principal {
    /// Roles are the provider's claims plus `User`, plus `Admin` when the local
    /// profile grants it.
    pub fn new(user: LocalUser, profile: UserProfile, identity: VerifiedIdentity) -> Self {
        let mut roles = vec![Role::User];
        for role in &identity.roles {
            if !roles.contains(role) {
                roles.push(*role);
            }
        }
        if profile.is_admin && !roles.contains(&Role::Admin) {
            roles.push(Role::Admin);
        }

        Self {
            user,
            profile,
            identity,
            roles,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}
