//! Dashboard counters

use crate::api::admin::stats_response::{HEALTH_HEALTHY, HEALTH_WARNING, StatsResponse, SystemHealth};
use crate::api::envelope::Envelope;
use crate::api::error::Result as ApiResult;
use crate::api::extractors::admin_principal::AdminPrincipal;
use crate::app_state::AppState;

use ss_core::{MessageStatus, SkillStatus};
use ss_db::{MessageRepository, SettingsRepository, SkillRepository, UserRepository};

use axum::{Json, extract::State};
use chrono::Utc;

/// GET /admin/stats
pub async fn get_stats(
    State(state): State<AppState>,
    AdminPrincipal(_admin): AdminPrincipal,
) -> ApiResult<Json<Envelope<StatsResponse>>> {
    let users = UserRepository::new(state.pool.clone());
    let skills = SkillRepository::new(state.pool.clone());
    let messages = MessageRepository::new(state.pool.clone());
    let settings = SettingsRepository::new(state.pool.clone()).get().await?;

    let mut issues = Vec::new();
    if settings.maintenance_mode {
        issues.push("Maintenance mode is enabled".to_string());
    }

    let system_health = SystemHealth {
        status: if issues.is_empty() {
            HEALTH_HEALTHY
        } else {
            HEALTH_WARNING
        },
        last_checked: Utc::now().to_rfc3339(),
        issues,
    };

    let stats = StatsResponse {
        total_users: users.count().await?,
        active_users: users.count_active().await?,
        total_skills: skills.count().await?,
        pending_skills: skills.count_by_status(SkillStatus::Pending).await?,
        new_messages: messages.count_by_status(MessageStatus::New).await?,
        system_health,
    };

    Ok(Json(Envelope::success("Statistics retrieved", stats)))
}
