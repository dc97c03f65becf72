use serde::Deserialize;

/// Public contact form submission
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub message: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ContactResponse {
    pub id: String,
}
