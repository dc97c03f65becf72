//! Skill listing moderation handlers

use crate::api::admin::create_skill_request::CreateSkillRequest;
use crate::api::admin::deleted_response::DeletedResponse;
use crate::api::admin::skill_dto::SkillDto;
use crate::api::admin::update_skill_request::UpdateSkillRequest;
use crate::api::envelope::Envelope;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::admin_principal::AdminPrincipal;
use crate::api::extractors::json_body::JsonBody;
use crate::app_state::AppState;

use ss_core::{Skill, SkillStatus};
use ss_db::{ProfileRepository, SettingsRepository, SkillRepository, SkillWithAuthor, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use log::info;
use uuid::Uuid;

/// GET /admin/skills
pub async fn list_skills(
    State(state): State<AppState>,
    AdminPrincipal(_admin): AdminPrincipal,
) -> ApiResult<Json<Envelope<Vec<SkillDto>>>> {
    let skills = SkillRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(Envelope::success(
        "Skills retrieved",
        skills.into_iter().map(SkillDto::from).collect(),
    )))
}

/// POST /admin/skills
///
/// New listings start `pending` while approval is required, `active` otherwise.
pub async fn create_skill(
    State(state): State<AppState>,
    AdminPrincipal(admin): AdminPrincipal,
    JsonBody(request): JsonBody<CreateSkillRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<SkillDto>>)> {
    let author_id = Uuid::parse_str(&request.author_id).map_err(|e| {
        ApiError::validation(format!("Invalid authorId: {}", e), Some("authorId"))
    })?;

    let mut skill = Skill::new(
        author_id,
        request.title.trim().to_string(),
        request.category.trim().to_string(),
    );
    skill.validate()?;

    let author = UserRepository::new(state.pool.clone())
        .find_by_id(author_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", author_id)))?;

    let settings = SettingsRepository::new(state.pool.clone()).get().await?;
    let profile = ProfileRepository::new(state.pool.clone())
        .find_or_empty(author_id)
        .await?;

    if profile.skills_count >= i64::from(settings.max_skills_per_user) {
        return Err(ApiError::validation(
            format!(
                "Author already has the maximum of {} skills",
                settings.max_skills_per_user
            ),
            Some("authorId"),
        ));
    }

    if !settings.skill_approval_required {
        skill.status = SkillStatus::Active;
    }

    let repo = SkillRepository::new(state.pool.clone());
    repo.create(&skill).await?;

    info!("Skill {} created for {} by {}", skill.id, author_id, admin.user_id());

    let created = SkillWithAuthor {
        author_name: author.name().to_string(),
        skill,
    };

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success("Skill created", created.into())),
    ))
}

/// GET /admin/skills/{id}
pub async fn get_skill(
    State(state): State<AppState>,
    AdminPrincipal(_admin): AdminPrincipal,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<SkillDto>>> {
    let skill_id = Uuid::parse_str(&id)?;
    let skill = find_skill(&state, skill_id).await?;

    Ok(Json(Envelope::success("Skill retrieved", skill.into())))
}

/// PATCH /admin/skills/{id}
pub async fn update_skill(
    State(state): State<AppState>,
    AdminPrincipal(admin): AdminPrincipal,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateSkillRequest>,
) -> ApiResult<Json<Envelope<SkillDto>>> {
    let skill_id = Uuid::parse_str(&id)?;
    let status: SkillStatus = request.status.parse()?;

    let updated = SkillRepository::new(state.pool.clone())
        .update_status(skill_id, status, Utc::now())
        .await?;

    if !updated {
        return Err(ApiError::not_found(format!("Skill {} not found", skill_id)));
    }

    info!("Skill {} set to {} by {}", skill_id, status.as_str(), admin.user_id());

    let skill = find_skill(&state, skill_id).await?;

    Ok(Json(Envelope::success("Skill updated", skill.into())))
}

/// DELETE /admin/skills/{id}
pub async fn delete_skill(
    State(state): State<AppState>,
    AdminPrincipal(admin): AdminPrincipal,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<DeletedResponse>>> {
    let skill_id = Uuid::parse_str(&id)?;

    let deleted = SkillRepository::new(state.pool.clone())
        .delete(skill_id)
        .await?;

    if !deleted {
        return Err(ApiError::not_found(format!("Skill {} not found", skill_id)));
    }

    info!("Skill {} deleted by {}", skill_id, admin.user_id());

    Ok(Json(Envelope::success(
        "Skill deleted",
        DeletedResponse {
            id: skill_id.to_string(),
        },
    )))
}

async fn find_skill(state: &AppState, skill_id: Uuid) -> ApiResult<SkillWithAuthor> {
    SkillRepository::new(state.pool.clone())
        .find_by_id(skill_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Skill {} not found", skill_id)))
}
