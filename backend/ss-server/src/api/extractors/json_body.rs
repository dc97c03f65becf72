use crate::api::error::{ApiError, CODE_INVALID_BODY};

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejection is rendered through the API error envelope
/// instead of axum's plain-text response.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => Err(ApiError::BadRequest {
                    code: CODE_INVALID_BODY,
                    message: rejection.body_text(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
