//! Admin authentication, done once per request

use crate::api::error::ApiError;
use crate::api::extractors::bearer_credential::BearerCredential;
use crate::app_state::AppState;
use crate::session::Principal;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Authenticated caller holding the `Admin` role on an active account
pub struct AdminPrincipal(pub Principal);

impl FromRequestParts<AppState> for AdminPrincipal {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let BearerCredential(token) = BearerCredential::from_request_parts(parts, state).await?;
            let principal = state.session().require_admin(&token).await?;

            Ok(AdminPrincipal(principal))
        }
    }
}
