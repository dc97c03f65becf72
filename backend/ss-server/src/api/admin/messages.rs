//! Contact message inbox handlers

use crate::api::admin::deleted_response::DeletedResponse;
use crate::api::admin::message_dto::MessageDto;
use crate::api::admin::reply_request::ReplyRequest;
use crate::api::admin::update_message_request::UpdateMessageRequest;
use crate::api::envelope::Envelope;
use crate::api::error::{ApiError, CODE_CONFLICT, Result as ApiResult};
use crate::api::extractors::admin_principal::AdminPrincipal;
use crate::api::extractors::json_body::JsonBody;
use crate::app_state::AppState;

use ss_core::{MessageReply, MessageStatus};
use ss_db::{DbError, MessageReplyRepository, MessageRepository, MessageThread};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::info;
use uuid::Uuid;

/// GET /admin/messages
pub async fn list_messages(
    State(state): State<AppState>,
    AdminPrincipal(_admin): AdminPrincipal,
) -> ApiResult<Json<Envelope<Vec<MessageDto>>>> {
    let messages = MessageRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(Envelope::success(
        "Messages retrieved",
        messages.into_iter().map(MessageDto::from).collect(),
    )))
}

/// GET /admin/messages/{id}
pub async fn get_message(
    State(state): State<AppState>,
    AdminPrincipal(_admin): AdminPrincipal,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<MessageDto>>> {
    let message_id = Uuid::parse_str(&id)?;
    let thread = find_thread(&state, message_id).await?;

    Ok(Json(Envelope::success("Message retrieved", thread.into())))
}

/// PATCH /admin/messages/{id}
pub async fn update_message(
    State(state): State<AppState>,
    AdminPrincipal(_admin): AdminPrincipal,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateMessageRequest>,
) -> ApiResult<Json<Envelope<MessageDto>>> {
    let message_id = Uuid::parse_str(&id)?;
    let status: MessageStatus = request.status.parse()?;

    let updated = MessageRepository::new(state.pool.clone())
        .update_status(message_id, status)
        .await?;

    if !updated {
        return Err(ApiError::not_found(format!("Message {} not found", message_id)));
    }

    let thread = find_thread(&state, message_id).await?;

    Ok(Json(Envelope::success("Message updated", thread.into())))
}

/// DELETE /admin/messages/{id}
///
/// The reply, if any, goes with it.
pub async fn delete_message(
    State(state): State<AppState>,
    AdminPrincipal(admin): AdminPrincipal,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<DeletedResponse>>> {
    let message_id = Uuid::parse_str(&id)?;

    let deleted = MessageRepository::new(state.pool.clone())
        .delete(message_id)
        .await?;

    if !deleted {
        return Err(ApiError::not_found(format!("Message {} not found", message_id)));
    }

    info!("Message {} deleted by {}", message_id, admin.user_id());

    Ok(Json(Envelope::success(
        "Message deleted",
        DeletedResponse {
            id: message_id.to_string(),
        },
    )))
}

/// POST /admin/messages/{id}/reply
///
/// One reply per message; a second attempt is a 409 and leaves the first intact.
/// Replying to an unread message marks it read.
pub async fn reply_to_message(
    State(state): State<AppState>,
    AdminPrincipal(admin): AdminPrincipal,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<ReplyRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<MessageDto>>)> {
    let message_id = Uuid::parse_str(&id)?;
    let thread = find_thread(&state, message_id).await?;

    let admin_name = request
        .admin_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| admin.user.name());

    let reply = MessageReply::new(message_id, admin.user_id(), admin_name, &request.content)?;

    match MessageReplyRepository::new(state.pool.clone())
        .create(&reply)
        .await
    {
        Ok(()) => {}
        Err(DbError::Conflict { .. }) => {
            return Err(ApiError::Conflict {
                code: CODE_CONFLICT,
                message: "This message has already been replied to".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(e) => return Err(e.into()),
    }

    if thread.message.status == MessageStatus::New {
        MessageRepository::new(state.pool.clone())
            .update_status(message_id, MessageStatus::Read)
            .await?;
    }

    info!("Message {} replied to by {}", message_id, admin.user_id());

    let thread = find_thread(&state, message_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success("Reply sent", thread.into())),
    ))
}

async fn find_thread(state: &AppState, message_id: Uuid) -> ApiResult<MessageThread> {
    MessageRepository::new(state.pool.clone())
        .find_by_id(message_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Message {} not found", message_id)))
}
