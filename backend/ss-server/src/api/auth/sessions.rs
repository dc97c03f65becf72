//! Session REST handlers: register, status, verify-email, google, login

use crate::api::auth::id_token_request::IdTokenRequest;
use crate::api::auth::responses::{
    GoogleSignInResponse, LoginResponse, RegisterResponse, StatusResponse, VerifyEmailResponse,
};
use crate::api::envelope::Envelope;
use crate::api::error::Result as ApiResult;
use crate::api::extractors::bearer_credential::BearerCredential;
use crate::api::extractors::json_body::JsonBody;
use crate::app_state::AppState;

use ss_core::Role;

use axum::{Json, extract::State};

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<IdTokenRequest>,
) -> ApiResult<Json<Envelope<RegisterResponse>>> {
    let registration = state.session().register(request.credential()).await?;

    Ok(Json(Envelope::success(
        "User registered successfully",
        RegisterResponse {
            identity: registration.identity.into(),
            user_id: registration.user_id.to_string(),
        },
    )))
}

/// GET /auth/status
pub async fn status(
    State(state): State<AppState>,
    BearerCredential(token): BearerCredential,
) -> ApiResult<Json<Envelope<StatusResponse>>> {
    let account = state.session().status(&token).await?;
    let is_admin = account.profile.is_admin || account.identity.has_role(Role::Admin);

    Ok(Json(Envelope::success(
        "User status retrieved",
        StatusResponse {
            user_id: account.user.id.to_string(),
            active: account.user.is_active,
            is_admin,
            status: account.user.status().as_str().to_string(),
            identity: account.identity.into(),
        },
    )))
}

/// POST /auth/verify-email
///
/// 200 in both cases; `emailVerified` tells the client whether to keep polling.
pub async fn verify_email(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<IdTokenRequest>,
) -> ApiResult<Json<Envelope<VerifyEmailResponse>>> {
    let verification = state.session().verify_email(request.credential()).await?;

    let message = if verification.email_verified {
        "Email verified successfully"
    } else {
        "Email not yet verified"
    };

    Ok(Json(Envelope::success(
        message,
        VerifyEmailResponse {
            email_verified: verification.email_verified,
            user_id: verification.user_id.to_string(),
            active: verification.active,
        },
    )))
}

/// POST /auth/google
pub async fn google_sign_in(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<IdTokenRequest>,
) -> ApiResult<Json<Envelope<GoogleSignInResponse>>> {
    let sign_in = state.session().federated_sign_in(request.credential()).await?;

    let message = if sign_in.created {
        "Account created with Google sign-in"
    } else {
        "Google sign-in successful"
    };

    Ok(Json(Envelope::success(
        message,
        GoogleSignInResponse {
            identity: sign_in.identity.into(),
            user_id: sign_in.user_id.to_string(),
            created: sign_in.created,
        },
    )))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<IdTokenRequest>,
) -> ApiResult<Json<Envelope<LoginResponse>>> {
    let session = state.session().login(request.credential()).await?;
    let is_admin = session.profile.is_admin || session.identity.has_role(Role::Admin);

    Ok(Json(Envelope::success(
        "Login successful",
        LoginResponse {
            user_id: session.user.id.to_string(),
            is_admin,
            identity: session.identity.into(),
        },
    )))
}
