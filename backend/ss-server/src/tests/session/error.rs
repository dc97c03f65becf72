use crate::session::SessionError;

use ss_auth::AuthError;

use std::panic::Location;

use error_location::ErrorLocation;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn test_rejected_credentials_are_invalid_credential() {
    let errors = vec![
        AuthError::TokenExpired { location: here() },
        AuthError::InvalidToken {
            message: "INVALID_ID_TOKEN".into(),
            location: here(),
        },
        AuthError::InvalidClaim {
            claim: "sub".into(),
            message: "empty".into(),
            location: here(),
        },
    ];

    for error in errors {
        assert!(matches!(
            SessionError::from(error),
            SessionError::InvalidCredential { .. }
        ));
    }
}

#[test]
fn test_missing_provider_user_is_identity_not_found() {
    let error = AuthError::IdentityNotFound {
        message: "USER_NOT_FOUND".into(),
        location: here(),
    };

    assert!(matches!(
        SessionError::from(error),
        SessionError::IdentityNotFound { .. }
    ));
}

#[test]
fn test_verifier_outage_keeps_its_own_kind() {
    let errors = vec![
        AuthError::Unavailable {
            message: "timeout".into(),
            location: here(),
        },
        AuthError::InvalidKey {
            message: "bad pem".into(),
            location: here(),
        },
    ];

    for error in errors {
        assert!(matches!(
            SessionError::from(error),
            SessionError::Verifier { .. }
        ));
    }
}
