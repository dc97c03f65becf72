use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateSkillRequest {
    /// "pending", "active" or "rejected"
    pub status: String,
}
