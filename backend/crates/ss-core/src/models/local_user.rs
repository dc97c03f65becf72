use crate::{UserStatus, VerifiedIdentity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Local mirror of an identity held by the external provider.
///
/// `subject_id` is the provider's stable id and the correlation key; `email` is
/// unique but may change at the provider and is re-synchronised on sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalUser {
    pub id: Uuid,
    pub subject_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub is_active: bool,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub suspended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl LocalUser {
    /// Account created by explicit registration: inactive until the email is verified.
    pub fn registered(identity: &VerifiedIdentity) -> Self {
        Self::from_identity(identity, false)
    }

    /// Account provisioned by federated sign-in: active when the provider already
    /// vouches for the email.
    pub fn provisioned(identity: &VerifiedIdentity) -> Self {
        Self::from_identity(identity, identity.email_verified)
    }

    fn from_identity(identity: &VerifiedIdentity, verified: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject_id: identity.subject_id.clone(),
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            is_active: verified,
            email_verified_at: verified.then_some(now),
            suspended_at: None,
            created_at: now,
        }
    }

    pub fn status(&self) -> UserStatus {
        if self.suspended_at.is_some() {
            UserStatus::Suspended
        } else if self.is_active {
            UserStatus::Active
        } else {
            UserStatus::Pending
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended_at.is_some()
    }

    pub fn is_email_confirmed(&self) -> bool {
        self.email_verified_at.is_some()
    }

    /// Name shown in the admin console, falling back to the email address.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}
