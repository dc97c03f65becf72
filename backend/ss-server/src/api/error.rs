//! REST API error types
//!
//! Every failure leaves a handler as an `ApiError` and is rendered as the
//! `{status: "error", message, code}` envelope with the matching HTTP status.

use crate::session::SessionError;

use ss_core::CoreError;
use ss_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const CODE_MISSING_TOKEN: &str = "auth/missing-token";
pub const CODE_NO_TOKEN: &str = "auth/no-token";
pub const CODE_USER_NOT_FOUND: &str = "auth/user-not-found";
pub const CODE_ACCOUNT_EXISTS: &str = "auth/account-exists";
pub const CODE_EMAIL_NOT_VERIFIED: &str = "auth/email-not-verified";
pub const CODE_ACCOUNT_SUSPENDED: &str = "auth/account-suspended";
pub const CODE_REGISTRATION_CLOSED: &str = "auth/registration-closed";
pub const CODE_FORBIDDEN: &str = "auth/forbidden";
pub const CODE_VERIFIER_ERROR: &str = "auth/verifier-error";
pub const CODE_INVALID_BODY: &str = "request/invalid-body";
pub const CODE_VALIDATION_ERROR: &str = "request/validation-error";
pub const CODE_NOT_FOUND: &str = "resource/not-found";
pub const CODE_CONFLICT: &str = "resource/conflict";
pub const CODE_INTERNAL_ERROR: &str = "server/internal-error";

/// JSON error envelope
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Always "error"
    pub status: &'static str,
    pub message: String,
    /// Machine-readable error code (e.g. "auth/invalid-token")
    pub code: &'static str,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400)
    #[error("Bad request [{code}]: {message} {location}")]
    BadRequest {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or rejected credential (401)
    #[error("Unauthorized [{code}]: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden [{code}]: {message} {location}")]
    Forbidden {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Not found [{code}]: {message} {location}")]
    NotFound {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict [{code}]: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error [{code}]: {message} {location}")]
    Internal {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            code: CODE_NOT_FOUND,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            code: CODE_INTERNAL_ERROR,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => CODE_VALIDATION_ERROR,
            ApiError::BadRequest { code, .. }
            | ApiError::Unauthorized { code, .. }
            | ApiError::Forbidden { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::Conflict { code, .. }
            | ApiError::Internal { code, .. } => *code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let code = self.code();
        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::BadRequest { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorBody {
            status: "error",
            message,
            code,
            field,
        };

        (status, Json(body)).into_response()
    }
}

/// Map session failures onto client responses. Store and verifier details stay
/// in the log.
impl From<SessionError> for ApiError {
    #[track_caller]
    fn from(e: SessionError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            SessionError::MissingCredential { .. } => ApiError::BadRequest {
                code: CODE_MISSING_TOKEN,
                message: "No ID token provided".to_string(),
                location,
            },
            SessionError::InvalidCredential { source } => {
                log::debug!("Credential rejected: {}", source);
                ApiError::Unauthorized {
                    code: source.error_code(),
                    message: "Invalid or expired token".to_string(),
                    location,
                }
            }
            SessionError::IdentityNotFound { .. } => ApiError::NotFound {
                code: CODE_USER_NOT_FOUND,
                message: "User not found at identity provider".to_string(),
                location,
            },
            SessionError::Verifier { source } => {
                log::error!("Identity verifier error: {}", source);
                ApiError::Internal {
                    code: CODE_VERIFIER_ERROR,
                    message: "Identity provider unavailable".to_string(),
                    location,
                }
            }
            SessionError::AccountNotFound { .. } => ApiError::NotFound {
                code: CODE_USER_NOT_FOUND,
                message: "User not found".to_string(),
                location,
            },
            SessionError::DuplicateAccount { message, .. } => ApiError::Conflict {
                code: CODE_ACCOUNT_EXISTS,
                message,
                location,
            },
            SessionError::RegistrationClosed { .. } => ApiError::Forbidden {
                code: CODE_REGISTRATION_CLOSED,
                message: "New registrations are currently disabled".to_string(),
                location,
            },
            SessionError::EmailNotVerified { .. } => ApiError::Forbidden {
                code: CODE_EMAIL_NOT_VERIFIED,
                message: "Please verify your email before logging in".to_string(),
                location,
            },
            SessionError::AccountSuspended { .. } => ApiError::Forbidden {
                code: CODE_ACCOUNT_SUSPENDED,
                message: "This account has been suspended".to_string(),
                location,
            },
            SessionError::Forbidden { message, .. } => ApiError::Forbidden {
                code: CODE_FORBIDDEN,
                message,
                location,
            },
            SessionError::Store { source } => ApiError::from_db(source, location),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::from_db(e, ErrorLocation::from(Location::caller()))
    }
}

impl ApiError {
    fn from_db(e: DbError, location: ErrorLocation) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        match e {
            DbError::Conflict { .. } => ApiError::Conflict {
                code: CODE_CONFLICT,
                message: "Resource already exists".to_string(),
                location,
            },
            _ => ApiError::Internal {
                code: CODE_INTERNAL_ERROR,
                message: "Database operation failed".to_string(),
                location,
            },
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidSkillStatus { value, .. }
            | CoreError::InvalidMessageStatus { value, .. }
            | CoreError::InvalidUserStatus { value, .. } => ApiError::Validation {
                message: format!("Invalid status: {}", value),
                field: Some("status".to_string()),
                location,
            },
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid id format: {}", e),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
