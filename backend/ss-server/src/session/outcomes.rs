use ss_core::{LocalUser, UserProfile, VerifiedIdentity};

use uuid::Uuid;

/// Result of `register`
#[derive(Debug, Clone)]
pub struct Registration {
    pub identity: VerifiedIdentity,
    pub user_id: Uuid,
}

/// Result of `status`
#[derive(Debug, Clone)]
pub struct AccountStatus {
    pub identity: VerifiedIdentity,
    pub user: LocalUser,
    pub profile: UserProfile,
}

/// Result of `verify_email`. Not yet verified is a normal outcome, not an error.
#[derive(Debug, Clone)]
pub struct EmailVerification {
    pub identity: VerifiedIdentity,
    pub user_id: Uuid,
    pub email_verified: bool,
    /// True only on the call that flipped the account to active
    pub activated: bool,
    pub active: bool,
}

/// Result of `federated_sign_in`
#[derive(Debug, Clone)]
pub struct FederatedSignIn {
    pub identity: VerifiedIdentity,
    pub user_id: Uuid,
    pub created: bool,
}

/// Result of `login`
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub identity: VerifiedIdentity,
    pub user: LocalUser,
    pub profile: UserProfile,
}
