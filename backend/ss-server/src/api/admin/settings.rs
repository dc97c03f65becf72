//! System settings handlers

use crate::api::admin::settings_dto::{SettingsDto, UpdateSettingsRequest};
use crate::api::envelope::Envelope;
use crate::api::error::Result as ApiResult;
use crate::api::extractors::admin_principal::AdminPrincipal;
use crate::api::extractors::json_body::JsonBody;
use crate::app_state::AppState;

use ss_db::SettingsRepository;

use axum::{Json, extract::State};
use log::info;

/// GET /admin/settings
pub async fn get_settings(
    State(state): State<AppState>,
    AdminPrincipal(_admin): AdminPrincipal,
) -> ApiResult<Json<Envelope<SettingsDto>>> {
    let settings = SettingsRepository::new(state.pool.clone()).get().await?;

    Ok(Json(Envelope::success("Settings retrieved", settings.into())))
}

/// PUT /admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    AdminPrincipal(admin): AdminPrincipal,
    JsonBody(request): JsonBody<UpdateSettingsRequest>,
) -> ApiResult<Json<Envelope<SettingsDto>>> {
    let settings = request.into_settings();
    settings.validate()?;

    SettingsRepository::new(state.pool.clone())
        .update(&settings)
        .await?;

    info!(
        "Settings updated by {}: maintenance={} registrations={} approval={} max_skills={}",
        admin.user_id(),
        settings.maintenance_mode,
        settings.allow_new_registrations,
        settings.skill_approval_required,
        settings.max_skills_per_user
    );

    Ok(Json(Envelope::success("Settings updated", settings.into())))
}
