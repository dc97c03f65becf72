use crate::ApiError;
use crate::api::error::{
    CODE_ACCOUNT_EXISTS, CODE_ACCOUNT_SUSPENDED, CODE_CONFLICT, CODE_EMAIL_NOT_VERIFIED,
    CODE_FORBIDDEN, CODE_INTERNAL_ERROR, CODE_MISSING_TOKEN, CODE_NOT_FOUND,
    CODE_REGISTRATION_CLOSED, CODE_USER_NOT_FOUND, CODE_VALIDATION_ERROR, CODE_VERIFIER_ERROR,
};
use crate::session::SessionError;

use ss_auth::AuthError;
use ss_core::CoreError;
use ss_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_renders_error_envelope() {
    let (status, json) = body_json(ApiError::not_found("Skill 1 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], CODE_NOT_FOUND);
    assert_eq!(json["message"], "Skill 1 not found");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_carries_field() {
    let (status, json) =
        body_json(ApiError::validation("title cannot be empty", Some("title"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], CODE_VALIDATION_ERROR);
    assert_eq!(json["field"], "title");
}

#[tokio::test]
async fn test_internal_error_is_500() {
    let (status, json) = body_json(ApiError::internal("boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], CODE_INTERNAL_ERROR);
}

#[test]
fn test_session_errors_map_to_status_and_code() {
    let cases: Vec<(SessionError, StatusCode, &str)> = vec![
        (
            SessionError::MissingCredential { location: here() },
            StatusCode::BAD_REQUEST,
            CODE_MISSING_TOKEN,
        ),
        (
            SessionError::from(AuthError::TokenExpired { location: here() }),
            StatusCode::UNAUTHORIZED,
            "auth/token-expired",
        ),
        (
            SessionError::from(AuthError::InvalidToken {
                message: "bad signature".into(),
                location: here(),
            }),
            StatusCode::UNAUTHORIZED,
            "auth/invalid-token",
        ),
        (
            SessionError::from(AuthError::IdentityNotFound {
                message: "USER_NOT_FOUND".into(),
                location: here(),
            }),
            StatusCode::NOT_FOUND,
            CODE_USER_NOT_FOUND,
        ),
        (
            SessionError::from(AuthError::Unavailable {
                message: "connection refused".into(),
                location: here(),
            }),
            StatusCode::INTERNAL_SERVER_ERROR,
            CODE_VERIFIER_ERROR,
        ),
        (
            SessionError::AccountNotFound {
                subject_id: "sub-1".into(),
                location: here(),
            },
            StatusCode::NOT_FOUND,
            CODE_USER_NOT_FOUND,
        ),
        (
            SessionError::DuplicateAccount {
                message: "exists".into(),
                location: here(),
            },
            StatusCode::CONFLICT,
            CODE_ACCOUNT_EXISTS,
        ),
        (
            SessionError::RegistrationClosed { location: here() },
            StatusCode::FORBIDDEN,
            CODE_REGISTRATION_CLOSED,
        ),
        (
            SessionError::EmailNotVerified {
                email: "a@example.com".into(),
                location: here(),
            },
            StatusCode::FORBIDDEN,
            CODE_EMAIL_NOT_VERIFIED,
        ),
        (
            SessionError::AccountSuspended {
                user_id: "u".into(),
                location: here(),
            },
            StatusCode::FORBIDDEN,
            CODE_ACCOUNT_SUSPENDED,
        ),
        (
            SessionError::Forbidden {
                message: "Admin access required".into(),
                location: here(),
            },
            StatusCode::FORBIDDEN,
            CODE_FORBIDDEN,
        ),
    ];

    for (session_error, status, code) in cases {
        let label = session_error.to_string();
        let api_error = ApiError::from(session_error);
        assert_eq!(api_error.status_code(), status, "{}", label);
        assert_eq!(api_error.code(), code, "{}", label);
    }
}

#[tokio::test]
async fn test_store_conflict_is_409_without_sql_detail() {
    let db_error = DbError::Conflict {
        message: "UNIQUE constraint failed: message_replies.message_id".into(),
        location: here(),
    };

    let (status, json) = body_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], CODE_CONFLICT);
    assert!(!json["message"].as_str().unwrap().contains("UNIQUE"));
}

#[tokio::test]
async fn test_store_failure_hides_detail() {
    let db_error = DbError::Initialization {
        message: "disk I/O error at /var/lib/secret.db".into(),
        location: here(),
    };

    let (status, json) = body_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["message"].as_str().unwrap().contains("secret"));
}

#[test]
fn test_invalid_status_becomes_validation_error_on_status_field() {
    let core_error = CoreError::InvalidSkillStatus {
        value: "published".into(),
        location: here(),
    };

    match ApiError::from(core_error) {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("status"));
            assert!(message.contains("published"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_bad_uuid_becomes_validation_error_on_id_field() {
    let uuid_error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();

    match ApiError::from(uuid_error) {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("id")),
        other => panic!("expected validation error, got {:?}", other),
    }
}
