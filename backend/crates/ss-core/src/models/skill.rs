use crate::models::message::require_length;
use crate::{CoreResult, SkillStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_CATEGORY_LENGTH: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub category: String,
    pub status: SkillStatus,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl Skill {
    pub fn new(author_id: Uuid, title: String, category: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            author_id,
            category,
            status: SkillStatus::default(),
            created_at: now,
            last_modified: now,
        }
    }

    /// Title and category must be non-empty after trimming and within length limits.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_length("title", self.title.trim(), MAX_TITLE_LENGTH)?;
        require_length("category", self.category.trim(), MAX_CATEGORY_LENGTH)?;
        Ok(())
    }
}
