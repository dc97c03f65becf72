//! User moderation handlers

use crate::api::admin::deleted_response::DeletedResponse;
use crate::api::admin::update_user_request::UpdateUserRequest;
use crate::api::admin::user_dto::UserDto;
use crate::api::envelope::Envelope;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::admin_principal::AdminPrincipal;
use crate::api::extractors::json_body::JsonBody;
use crate::app_state::AppState;

use ss_core::{LocalUser, UserProfile, UserStatus};
use ss_db::{ProfileRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use log::info;
use uuid::Uuid;

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    AdminPrincipal(_admin): AdminPrincipal,
) -> ApiResult<Json<Envelope<Vec<UserDto>>>> {
    let users = UserRepository::new(state.pool.clone())
        .find_all_with_profiles()
        .await?;

    Ok(Json(Envelope::success(
        "Users retrieved",
        users.into_iter().map(UserDto::from).collect(),
    )))
}

/// GET /admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AdminPrincipal(_admin): AdminPrincipal,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<UserDto>>> {
    let user_id = Uuid::parse_str(&id)?;
    let user = find_user(&state, user_id).await?;

    Ok(Json(Envelope::success("User retrieved", user.into())))
}

/// PATCH /admin/users/{id}
///
/// Suspend, reinstate, promote, or demote. An admin cannot suspend or demote themselves.
pub async fn update_user(
    State(state): State<AppState>,
    AdminPrincipal(admin): AdminPrincipal,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> ApiResult<Json<Envelope<UserDto>>> {
    let user_id = Uuid::parse_str(&id)?;

    let status = request
        .status
        .as_deref()
        .map(str::parse::<UserStatus>)
        .transpose()?;

    if status == Some(UserStatus::Pending) {
        return Err(ApiError::validation(
            "status must be active or suspended",
            Some("status"),
        ));
    }

    if status.is_none() && request.is_admin.is_none() {
        return Err(ApiError::validation(
            "Nothing to update: provide status or isAdmin",
            None,
        ));
    }

    let is_self = admin.user_id() == user_id;
    if is_self && status == Some(UserStatus::Suspended) {
        return Err(ApiError::validation("You cannot suspend your own account", Some("status")));
    }
    if is_self && request.is_admin == Some(false) {
        return Err(ApiError::validation(
            "You cannot remove your own admin access",
            Some("isAdmin"),
        ));
    }

    // 404 before any write
    find_user(&state, user_id).await?;

    let users = UserRepository::new(state.pool.clone());
    match status {
        Some(UserStatus::Suspended) => {
            users.suspend(user_id, Utc::now()).await?;
            info!("User {} suspended by {}", user_id, admin.user_id());
        }
        Some(UserStatus::Active) => {
            users.reinstate(user_id).await?;
            info!("User {} reinstated by {}", user_id, admin.user_id());
        }
        _ => {}
    }

    if let Some(is_admin) = request.is_admin {
        ProfileRepository::new(state.pool.clone())
            .set_admin(user_id, is_admin)
            .await?;
        info!("User {} admin={} set by {}", user_id, is_admin, admin.user_id());
    }

    let user = find_user(&state, user_id).await?;

    Ok(Json(Envelope::success("User updated", user.into())))
}

/// DELETE /admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AdminPrincipal(admin): AdminPrincipal,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<DeletedResponse>>> {
    let user_id = Uuid::parse_str(&id)?;

    if admin.user_id() == user_id {
        return Err(ApiError::validation("You cannot delete your own account", Some("id")));
    }

    let deleted = UserRepository::new(state.pool.clone())
        .delete(user_id)
        .await?;

    if !deleted {
        return Err(ApiError::not_found(format!("User {} not found", user_id)));
    }

    info!("User {} deleted by {}", user_id, admin.user_id());

    Ok(Json(Envelope::success(
        "User deleted",
        DeletedResponse {
            id: user_id.to_string(),
        },
    )))
}

async fn find_user(state: &AppState, user_id: Uuid) -> ApiResult<(LocalUser, UserProfile)> {
    UserRepository::new(state.pool.clone())
        .find_with_profile(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))
}
