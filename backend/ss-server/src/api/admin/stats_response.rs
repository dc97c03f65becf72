use serde::Serialize;

pub const HEALTH_HEALTHY: &str = "healthy";
pub const HEALTH_WARNING: &str = "warning";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    /// healthy | warning
    pub status: &'static str,
    pub last_checked: String,
    pub issues: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_users: i64,
    pub active_users: i64,
    pub total_skills: i64,
    pub pending_skills: i64,
    pub new_messages: i64,
    pub system_health: SystemHealth,
}
