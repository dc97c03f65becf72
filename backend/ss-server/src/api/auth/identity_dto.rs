use ss_core::VerifiedIdentity;

use serde::Serialize;

/// Public fields of a verified identity
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    pub uid: String,
    pub email: String,
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl From<VerifiedIdentity> for IdentityDto {
    fn from(identity: VerifiedIdentity) -> Self {
        Self {
            uid: identity.subject_id,
            email: identity.email,
            email_verified: identity.email_verified,
            display_name: identity.display_name,
            photo_url: identity.photo_url,
        }
    }
}
