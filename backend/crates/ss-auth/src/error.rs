use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    /// The credential is valid but the provider has no such account
    #[error("Identity not found: {message} {location}")]
    IdentityNotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid verification key: {message} {location}")]
    InvalidKey {
        message: String,
        location: ErrorLocation,
    },

    /// The provider could not be reached or answered with something unexpected
    #[error("Identity provider unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Client-facing error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } | Self::JwtDecode { .. } | Self::InvalidClaim { .. } => {
                "auth/invalid-token"
            }
            Self::TokenExpired { .. } => "auth/token-expired",
            Self::MissingHeader { .. } | Self::InvalidScheme { .. } => "auth/no-token",
            Self::IdentityNotFound { .. } => "auth/user-not-found",
            Self::InvalidKey { .. } | Self::Unavailable { .. } => "auth/verifier-error",
        }
    }

    /// True when the caller presented a bad credential, as opposed to the
    /// verifier itself failing.
    pub fn is_credential_error(&self) -> bool {
        !matches!(
            self,
            Self::IdentityNotFound { .. } | Self::InvalidKey { .. } | Self::Unavailable { .. }
        )
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
