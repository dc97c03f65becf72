use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// "active" or "suspended"
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub is_admin: Option<bool>,
}
