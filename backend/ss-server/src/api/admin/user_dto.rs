use ss_core::{LocalUser, UserProfile};

use serde::Serialize;

/// Row of the admin user table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub uid: String,
    pub name: String,
    pub email: String,
    /// active | suspended | pending
    pub status: String,
    pub is_admin: bool,
    pub joined_date: String,
    pub last_active: Option<String>,
    pub skills_count: i64,
    pub email_verified: bool,
}

impl From<(LocalUser, UserProfile)> for UserDto {
    fn from((user, profile): (LocalUser, UserProfile)) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name().to_string(),
            status: user.status().as_str().to_string(),
            email_verified: user.is_email_confirmed(),
            joined_date: user.created_at.to_rfc3339(),
            uid: user.subject_id,
            email: user.email,
            is_admin: profile.is_admin,
            last_active: profile.last_active.map(|t| t.to_rfc3339()),
            skills_count: profile.skills_count,
        }
    }
}
