use crate::Result as DbErrorResult;
use crate::repositories::row::{optional_uuid_at, timestamp_at, uuid_at};

use ss_core::MessageReply;

use sqlx::Row;
use sqlx::SqlitePool;
use uuid::Uuid;

const TABLE: &str = "message_replies";

pub struct MessageReplyRepository {
    pool: SqlitePool,
}

impl MessageReplyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store the reply. A second reply for the same message fails with
    /// `DbError::Conflict` (unique `message_id`), so the first reply wins.
    pub async fn create(&self, reply: &MessageReply) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO message_replies (id, message_id, admin_id, admin_name, content, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(reply.id.to_string())
        .bind(reply.message_id.to_string())
        .bind(reply.admin_id.map(|id| id.to_string()))
        .bind(&reply.admin_name)
        .bind(&reply.content)
        .bind(reply.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_message(&self, message_id: Uuid) -> DbErrorResult<Option<MessageReply>> {
        let row = sqlx::query(
            r#"
              SELECT id, message_id, admin_id, admin_name, content, created_at
              FROM message_replies
              WHERE message_id = ?
              "#,
        )
        .bind(message_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(MessageReply {
            id: uuid_at(&row, TABLE, "id")?,
            message_id: uuid_at(&row, TABLE, "message_id")?,
            admin_id: optional_uuid_at(&row, TABLE, "admin_id")?,
            admin_name: row.try_get("admin_name")?,
            content: row.try_get("content")?,
            created_at: timestamp_at(&row, TABLE, "created_at")?,
        }))
    }
}
