use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Pull the token out of an `Authorization: Bearer <token>` header value.
#[track_caller]
pub fn extract_bearer(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.map(str::trim).unwrap_or_default();
    if header.is_empty() {
        return Err(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let Some((scheme, token)) = header.split_once(' ') else {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
