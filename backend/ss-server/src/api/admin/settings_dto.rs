use ss_core::SystemSettings;

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
    pub maintenance_mode: bool,
    pub allow_new_registrations: bool,
    pub skill_approval_required: bool,
    pub max_skills_per_user: i32,
    pub last_updated: String,
}

impl From<SystemSettings> for SettingsDto {
    fn from(s: SystemSettings) -> Self {
        Self {
            maintenance_mode: s.maintenance_mode,
            allow_new_registrations: s.allow_new_registrations,
            skill_approval_required: s.skill_approval_required,
            max_skills_per_user: s.max_skills_per_user,
            last_updated: s.last_updated.to_rfc3339(),
        }
    }
}

/// PUT body: the full settings record. `lastUpdated` is server-assigned.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub maintenance_mode: bool,
    pub allow_new_registrations: bool,
    pub skill_approval_required: bool,
    pub max_skills_per_user: i32,
}

impl UpdateSettingsRequest {
    pub fn into_settings(self) -> SystemSettings {
        SystemSettings {
            maintenance_mode: self.maintenance_mode,
            allow_new_registrations: self.allow_new_registrations,
            skill_approval_required: self.skill_approval_required,
            max_skills_per_user: self.max_skills_per_user,
            last_updated: Utc::now(),
        }
    }
}
