use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    /// "new", "read" or "archived"
    pub status: String,
}
