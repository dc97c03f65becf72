use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MAX_SKILLS_PER_USER_LIMIT: i32 = 1000;

/// Global settings. Exactly one row exists, seeded by the initial migration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemSettings {
    pub maintenance_mode: bool,
    pub allow_new_registrations: bool,
    pub skill_approval_required: bool,
    pub max_skills_per_user: i32,
    pub last_updated: DateTime<Utc>,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            maintenance_mode: false,
            allow_new_registrations: true,
            skill_approval_required: true,
            max_skills_per_user: 10,
            last_updated: Utc::now(),
        }
    }
}

impl SystemSettings {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if !(0..=MAX_SKILLS_PER_USER_LIMIT).contains(&self.max_skills_per_user) {
            return Err(CoreError::Validation {
                message: format!(
                    "maxSkillsPerUser must be 0-{}, got {}",
                    MAX_SKILLS_PER_USER_LIMIT, self.max_skills_per_user
                ),
                field: Some("maxSkillsPerUser".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
