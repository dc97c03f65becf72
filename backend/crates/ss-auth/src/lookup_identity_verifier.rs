use crate::{AuthError, IdentityVerifier, Result as AuthErrorResult, roles_from_claims};

use ss_core::{ErrorLocation, VerifiedIdentity};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

/// Verifies credentials by asking the provider's account lookup endpoint
/// (`POST {base}/v1/accounts:lookup`).
pub struct LookupIdentityVerifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    /// JSON object encoded as a string
    #[serde(default)]
    custom_attributes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CustomAttributes {
    #[serde(default)]
    admin: Option<bool>,
    #[serde(default)]
    roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LookupErrorResponse {
    error: LookupErrorBody,
}

#[derive(Debug, Deserialize)]
struct LookupErrorBody {
    message: String,
}

impl LookupIdentityVerifier {
    #[track_caller]
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> AuthErrorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Unavailable {
                message: format!("Cannot build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/v1/accounts:lookup", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        })
    }

    async fn lookup(&self, credential: &str) -> AuthErrorResult<LookupUser> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&serde_json::json!({ "idToken": credential }))
            .send()
            .await
            .map_err(|e| AuthError::Unavailable {
                message: format!("Lookup request failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AuthError::Unavailable {
            message: format!("Lookup response unreadable: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !status.is_success() {
            return Err(map_provider_error(status.as_u16(), &body));
        }

        let parsed: LookupResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::Unavailable {
                message: format!("Unexpected lookup response: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        parsed
            .users
            .into_iter()
            .next()
            .ok_or_else(|| AuthError::IdentityNotFound {
                message: "lookup returned no users".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[async_trait]
impl IdentityVerifier for LookupIdentityVerifier {
    async fn verify(&self, credential: &str) -> AuthErrorResult<VerifiedIdentity> {
        let user = self.lookup(credential).await?;

        let email = user
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "account has no email".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let attributes = match user.custom_attributes.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str::<CustomAttributes>(raw).unwrap_or_else(|e| {
                    warn!("Ignoring malformed custom attributes for {}: {}", user.local_id, e);
                    CustomAttributes::default()
                })
            }
            _ => CustomAttributes::default(),
        };

        debug!("Lookup verified subject {}", user.local_id);

        Ok(VerifiedIdentity {
            subject_id: user.local_id,
            email,
            email_verified: user.email_verified,
            display_name: user.display_name,
            photo_url: user.photo_url,
            roles: roles_from_claims(attributes.admin, &attributes.roles),
        })
    }

    fn name(&self) -> &'static str {
        "lookup"
    }
}

#[track_caller]
fn map_provider_error(status: u16, body: &str) -> AuthError {
    let location = ErrorLocation::from(Location::caller());
    let message = serde_json::from_str::<LookupErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect());

    // Provider messages look like "INVALID_ID_TOKEN" or "TOKEN_EXPIRED : detail"
    let kind = message.split([' ', ':']).next().unwrap_or_default();
    match kind {
        "INVALID_ID_TOKEN" | "USER_DISABLED" => AuthError::InvalidToken { message, location },
        "TOKEN_EXPIRED" => AuthError::TokenExpired { location },
        "USER_NOT_FOUND" => AuthError::IdentityNotFound { message, location },
        _ => AuthError::Unavailable {
            message: format!("HTTP {}: {}", status, message),
            location,
        },
    }
}
