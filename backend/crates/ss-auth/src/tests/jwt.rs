use crate::{AuthError, IdentityVerifier, JwtIdentityVerifier, ProviderClaims};

use ss_core::Role;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Provider-shaped token body, including the registered claims the
/// verifier checks when a project id is configured
#[derive(Serialize)]
struct TokenBody<'a> {
    #[serde(flatten)]
    claims: &'a ProviderClaims,
    iss: String,
    aud: String,
}

fn create_test_token(claims: &ProviderClaims, project_id: &str, secret: &[u8]) -> String {
    let body = TokenBody {
        claims,
        iss: format!("https://securetoken.google.com/{}", project_id),
        aud: project_id.to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &body,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims() -> ProviderClaims {
    ProviderClaims {
        sub: "user-123".to_string(),
        email: Some("user@example.com".to_string()),
        email_verified: true,
        name: Some("User".to_string()),
        picture: Some("https://example.com/u.png".to_string()),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
        admin: None,
        roles: vec!["user".to_string()],
    }
}

#[test]
fn given_valid_token_when_validated_then_returns_claims() {
    let verifier = JwtIdentityVerifier::with_hs256(SECRET, Some("skillswap"));
    let token = create_test_token(&valid_claims(), "skillswap", SECRET);

    let result = verifier.validate(&token);

    assert!(result.is_ok());
    let validated = result.unwrap();
    assert_eq!(validated.sub, "user-123");
    assert_eq!(verifier.algorithm(), "HS256");
}

#[test]
fn given_expired_token_when_validated_then_returns_token_expired_error() {
    let verifier = JwtIdentityVerifier::with_hs256(SECRET, Some("skillswap"));
    let mut claims = valid_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_test_token(&claims, "skillswap", SECRET);

    let result = verifier.validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_returns_decode_error() {
    let wrong_secret = b"wrong-secret-key-at-least-32-by";
    let verifier = JwtIdentityVerifier::with_hs256(wrong_secret, Some("skillswap"));
    let token = create_test_token(&valid_claims(), "skillswap", SECRET);

    let result = verifier.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_token_for_other_project_when_validated_then_rejected() {
    let verifier = JwtIdentityVerifier::with_hs256(SECRET, Some("skillswap"));
    let token = create_test_token(&valid_claims(), "someone-else", SECRET);

    let result = verifier.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_no_project_when_token_has_audience_then_accepted() {
    let verifier = JwtIdentityVerifier::with_hs256(SECRET, None);
    let token = create_test_token(&valid_claims(), "anything", SECRET);

    assert!(verifier.validate(&token).is_ok());
}

#[test]
fn given_invalid_pem_when_rs256_created_then_invalid_key() {
    let result = JwtIdentityVerifier::with_rs256("not a pem", None);

    assert!(matches!(result, Err(AuthError::InvalidKey { .. })));
}

#[tokio::test]
async fn given_admin_claim_when_verified_then_identity_has_admin_role() {
    let verifier = JwtIdentityVerifier::with_hs256(SECRET, Some("skillswap"));
    let mut claims = valid_claims();
    claims.admin = Some(true);
    let token = create_test_token(&claims, "skillswap", SECRET);

    let identity = verifier.verify(&token).await.unwrap();

    assert_eq!(identity.subject_id, "user-123");
    assert!(identity.email_verified);
    assert!(identity.has_role(Role::Admin));
    assert!(identity.has_role(Role::User));
    assert_eq!(verifier.name(), "jwt");
}

#[tokio::test]
async fn given_garbage_credential_when_verified_then_credential_error() {
    let verifier = JwtIdentityVerifier::with_hs256(SECRET, None);

    let err = verifier.verify("not-a-jwt").await.unwrap_err();

    assert!(err.is_credential_error());
    assert_eq!(err.error_code(), "auth/invalid-token");
}
