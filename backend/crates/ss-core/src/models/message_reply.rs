use crate::CoreResult;
use crate::models::message::{MAX_BODY_LENGTH, MAX_NAME_LENGTH, require_length};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin reply to a contact message. At most one exists per message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageReply {
    pub id: Uuid,
    pub message_id: Uuid,
    /// Cleared when the replying admin account is deleted
    pub admin_id: Option<Uuid>,
    pub admin_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl MessageReply {
    #[track_caller]
    pub fn new(message_id: Uuid, admin_id: Uuid, admin_name: &str, content: &str) -> CoreResult<Self> {
        let admin_name = admin_name.trim();
        let content = content.trim();

        require_length("adminName", admin_name, MAX_NAME_LENGTH)?;
        require_length("content", content, MAX_BODY_LENGTH)?;

        Ok(Self {
            id: Uuid::new_v4(),
            message_id,
            admin_id: Some(admin_id),
            admin_name: admin_name.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        })
    }
}
