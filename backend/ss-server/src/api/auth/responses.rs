use crate::api::auth::identity_dto::IdentityDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(flatten)]
    pub identity: IdentityDto,
    pub user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(flatten)]
    pub identity: IdentityDto,
    pub user_id: String,
    pub active: bool,
    pub is_admin: bool,
    /// active | suspended | pending
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailResponse {
    pub email_verified: bool,
    pub user_id: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSignInResponse {
    #[serde(flatten)]
    pub identity: IdentityDto,
    pub user_id: String,
    pub created: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(flatten)]
    pub identity: IdentityDto,
    pub user_id: String,
    pub is_admin: bool,
}
