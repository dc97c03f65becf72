use ss_auth::AuthError;
use ss_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No credential supplied {location}")]
    MissingCredential { location: ErrorLocation },

    /// The verifier rejected the credential (bad signature, malformed, expired)
    #[error("Invalid credential: {source}")]
    InvalidCredential {
        #[source]
        source: AuthError,
    },

    /// The credential was fine but the provider has no such user
    #[error("Identity not found at provider: {source}")]
    IdentityNotFound {
        #[source]
        source: AuthError,
    },

    #[error("Identity verifier failed: {source}")]
    Verifier {
        #[source]
        source: AuthError,
    },

    #[error("No local account for subject {subject_id} {location}")]
    AccountNotFound {
        subject_id: String,
        location: ErrorLocation,
    },

    #[error("Account already exists: {message} {location}")]
    DuplicateAccount {
        message: String,
        location: ErrorLocation,
    },

    #[error("New registrations are disabled {location}")]
    RegistrationClosed { location: ErrorLocation },

    #[error("Email not verified for {email} {location}")]
    EmailNotVerified {
        email: String,
        location: ErrorLocation,
    },

    #[error("Account {user_id} is suspended {location}")]
    AccountSuspended {
        user_id: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error: {source}")]
    Store {
        #[source]
        source: DbError,
    },
}

impl From<AuthError> for SessionError {
    fn from(source: AuthError) -> Self {
        match source {
            AuthError::IdentityNotFound { .. } => Self::IdentityNotFound { source },
            _ if source.is_credential_error() => Self::InvalidCredential { source },
            _ => Self::Verifier { source },
        }
    }
}

impl From<DbError> for SessionError {
    fn from(source: DbError) -> Self {
        Self::Store { source }
    }
}

impl SessionError {
    #[track_caller]
    pub(crate) fn duplicate<S: Into<String>>(message: S) -> Self {
        Self::DuplicateAccount {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn admin_required() -> Self {
        Self::Forbidden {
            message: "Admin access required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
