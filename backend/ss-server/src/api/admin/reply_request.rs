use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub content: String,

    /// Signature shown to the sender; defaults to the admin's display name
    #[serde(default)]
    pub admin_name: Option<String>,
}
