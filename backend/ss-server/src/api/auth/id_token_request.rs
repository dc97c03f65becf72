use serde::Deserialize;

/// Body of every credential-in-body auth route
#[derive(Debug, Default, Deserialize)]
pub struct IdTokenRequest {
    #[serde(rename = "idToken", default)]
    pub id_token: Option<String>,
}

impl IdTokenRequest {
    /// Missing and empty tokens are both rejected downstream as a missing credential
    pub fn credential(&self) -> &str {
        self.id_token.as_deref().unwrap_or_default()
    }
}
