#![allow(dead_code)]

//! Test infrastructure for ss-server HTTP tests

use ss_auth::{AuthError, IdentityVerifier, JwtIdentityVerifier, ProviderClaims};
use ss_core::{LocalUser, VerifiedIdentity};
use ss_db::{ProfileRepository, UserRepository};
use ss_server::{AppState, build_router};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-at-least-32";
pub const TEST_PROJECT: &str = "skillswap-test";

/// Router plus direct store access for arranging and asserting
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// Create an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ss_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// App backed by the HS256 verifier; tokens come from `id_token`
pub async fn spawn_app() -> TestApp {
    let verifier = JwtIdentityVerifier::with_hs256(TEST_SECRET, Some(TEST_PROJECT));
    spawn_app_with(Arc::new(verifier)).await
}

pub async fn spawn_app_with(verifier: Arc<dyn IdentityVerifier>) -> TestApp {
    let pool = create_test_pool().await;
    let router = build_router(AppState::new(pool.clone(), verifier), &[]);

    TestApp { router, pool }
}

/// Provider-side account used to mint tokens
#[derive(Clone)]
pub struct TestIdentity {
    pub sub: String,
    pub email: String,
    pub email_verified: bool,
    pub name: Option<String>,
    pub admin_claim: bool,
}

impl TestIdentity {
    pub fn new(sub: &str, email: &str) -> Self {
        Self {
            sub: sub.to_string(),
            email: email.to_string(),
            email_verified: false,
            name: None,
            admin_claim: false,
        }
    }

    pub fn verified(mut self) -> Self {
        self.email_verified = true;
        self
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn token(&self) -> String {
        id_token(self)
    }

    pub fn as_verified_identity(&self) -> VerifiedIdentity {
        VerifiedIdentity {
            subject_id: self.sub.clone(),
            email: self.email.clone(),
            email_verified: self.email_verified,
            display_name: self.name.clone(),
            photo_url: None,
            roles: vec![],
        }
    }
}

#[derive(Serialize)]
struct TokenBody<'a> {
    #[serde(flatten)]
    claims: &'a ProviderClaims,
    iss: String,
    aud: String,
}

pub fn id_token(identity: &TestIdentity) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = ProviderClaims {
        sub: identity.sub.clone(),
        email: Some(identity.email.clone()),
        email_verified: identity.email_verified,
        name: identity.name.clone(),
        picture: None,
        exp: now + 3600,
        iat: now,
        admin: identity.admin_claim.then_some(true),
        roles: vec![],
    };

    let body = TokenBody {
        claims: &claims,
        iss: format!("https://securetoken.google.com/{}", TEST_PROJECT),
        aud: TEST_PROJECT.to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &body,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to sign test token")
}

/// Token signed with the right key that expired an hour ago
pub fn expired_token(identity: &TestIdentity) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = ProviderClaims {
        sub: identity.sub.clone(),
        email: Some(identity.email.clone()),
        email_verified: identity.email_verified,
        name: None,
        picture: None,
        exp: now - 3600,
        iat: now - 7200,
        admin: None,
        roles: vec![],
    };

    let body = TokenBody {
        claims: &claims,
        iss: format!("https://securetoken.google.com/{}", TEST_PROJECT),
        aud: TEST_PROJECT.to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &body,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to sign test token")
}

/// Insert an active local account directly, bypassing the session routes
pub async fn create_active_user(pool: &SqlitePool, identity: &TestIdentity) -> LocalUser {
    let user = LocalUser::provisioned(&identity.clone().verified().as_verified_identity());
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

/// Active admin account and a token for it
pub async fn create_admin(pool: &SqlitePool, sub: &str) -> (LocalUser, String) {
    let identity = TestIdentity::new(sub, &format!("{}@example.com", sub))
        .verified()
        .named("Admin");
    let user = create_active_user(pool, &identity).await;
    ProfileRepository::new(pool.clone())
        .set_admin(user.id, true)
        .await
        .expect("Failed to grant admin");
    (user, identity.token())
}

/// Send a request and decode the JSON response body (Null when empty or not JSON)
pub async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub async fn post_id_token(app: &TestApp, uri: &str, token: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        uri,
        None,
        Some(serde_json::json!({ "idToken": token })),
    )
    .await
}

pub fn parse_id(json: &Value, pointer: &str) -> Uuid {
    Uuid::parse_str(json.pointer(pointer).and_then(Value::as_str).unwrap()).unwrap()
}

/// Verifier that always fails with a fixed kind of error
pub struct FailingVerifier {
    pub not_found: bool,
}

#[async_trait]
impl IdentityVerifier for FailingVerifier {
    async fn verify(&self, _credential: &str) -> ss_auth::Result<VerifiedIdentity> {
        let location = ErrorLocation::from(Location::caller());
        if self.not_found {
            Err(AuthError::IdentityNotFound {
                message: "USER_NOT_FOUND".to_string(),
                location,
            })
        } else {
            Err(AuthError::Unavailable {
                message: "connection refused".to_string(),
                location,
            })
        }
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
