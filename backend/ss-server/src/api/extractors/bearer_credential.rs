use crate::api::error::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use error_location::ErrorLocation;

/// Token taken from `Authorization: Bearer <token>`
pub struct BearerCredential(pub String);

impl<S> FromRequestParts<S> for BearerCredential
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            match ss_auth::extract_bearer(header) {
                Ok(token) => Ok(BearerCredential(token.to_string())),
                Err(e) => Err(ApiError::Unauthorized {
                    code: e.error_code(),
                    message: "No valid Authorization header provided".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
