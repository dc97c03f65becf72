use crate::{AuthError, Result as AuthErrorResult};

use ss_core::{Role, VerifiedIdentity};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_SUBJECT_LENGTH: usize = 128;

/// Claims carried by a provider ID token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderClaims {
    /// Subject (provider user id)
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Custom claim: `admin: true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    /// Custom claim: list of role names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl ProviderClaims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > MAX_SUBJECT_LENGTH {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.as_deref().is_none_or(|e| e.trim().is_empty()) {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "token carries no email".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    #[track_caller]
    pub fn into_identity(self) -> AuthErrorResult<VerifiedIdentity> {
        self.validate()?;

        let roles = roles_from_claims(self.admin, &self.roles);
        Ok(VerifiedIdentity {
            subject_id: self.sub,
            email: self.email.unwrap_or_default().trim().to_string(),
            email_verified: self.email_verified,
            display_name: self.name,
            photo_url: self.picture,
            roles,
        })
    }
}

/// Merge the `admin` flag and the `roles` list into known roles, without duplicates.
pub fn roles_from_claims(admin: Option<bool>, roles: &[String]) -> Vec<Role> {
    let mut resolved: Vec<Role> = Vec::new();

    let claimed = roles.iter().filter_map(|r| Role::from_claim(r));
    let admin_flag = (admin == Some(true)).then_some(Role::Admin);

    for role in claimed.chain(admin_flag) {
        if !resolved.contains(&role) {
            resolved.push(role);
        }
    }

    resolved
}
