//! Public contact form

use crate::api::contact::contact_request::{ContactRequest, ContactResponse};
use crate::api::envelope::Envelope;
use crate::api::error::Result as ApiResult;
use crate::api::extractors::json_body::JsonBody;
use crate::app_state::AppState;

use ss_core::Message;
use ss_db::MessageRepository;

use axum::{Json, extract::State, http::StatusCode};
use log::info;

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ContactRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<ContactResponse>>)> {
    let message = Message::new(&request.name, &request.email, &request.message)?;

    MessageRepository::new(state.pool.clone())
        .create(&message)
        .await?;

    info!("Contact message {} received", message.id);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(
            "Message sent",
            ContactResponse {
                id: message.id.to_string(),
            },
        )),
    ))
}
