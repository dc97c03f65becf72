use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional 1:1 extension of a `LocalUser`.
///
/// Rows are created lazily; a missing row reads as `UserProfile::empty`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub is_admin: bool,
    pub skills_count: i64,
    pub last_active: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_admin: false,
            skills_count: 0,
            last_active: None,
        }
    }
}
