use crate::Result as DbErrorResult;
use crate::repositories::row::{optional_uuid_at, parsed_at, timestamp_at, uuid_at};

use ss_core::{Message, MessageReply, MessageStatus};

use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const TABLE: &str = "messages";

/// Contact message together with its reply, if one was sent.
#[derive(Debug, Clone)]
pub struct MessageThread {
    pub message: Message,
    pub reply: Option<MessageReply>,
}

pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &Message) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO messages (id, name, email, body, status, created_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(message.id.to_string())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.body)
        .bind(message.status.as_str())
        .bind(message.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<MessageThread>> {
        let row = sqlx::query(
            r#"
              SELECT m.id, m.name, m.email, m.body, m.status, m.created_at,
                     r.id AS reply_id, r.admin_id AS reply_admin_id,
                     r.admin_name AS reply_admin_name, r.content AS reply_content,
                     r.created_at AS reply_created_at
              FROM messages m
              LEFT JOIN message_replies r ON r.message_id = m.id
              WHERE m.id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_thread).transpose()
    }

    /// All messages, newest first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<MessageThread>> {
        let rows = sqlx::query(
            r#"
              SELECT m.id, m.name, m.email, m.body, m.status, m.created_at,
                     r.id AS reply_id, r.admin_id AS reply_admin_id,
                     r.admin_name AS reply_admin_name, r.content AS reply_content,
                     r.created_at AS reply_created_at
              FROM messages m
              LEFT JOIN message_replies r ON r.message_id = m.id
              ORDER BY m.created_at DESC, m.id ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_thread).collect()
    }

    pub async fn update_status(&self, id: Uuid, status: MessageStatus) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE messages SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_by_status(&self, status: MessageStatus) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages WHERE status = ?")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn map_thread(row: &SqliteRow) -> DbErrorResult<MessageThread> {
    let message = Message {
        id: uuid_at(row, TABLE, "id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        body: row.try_get("body")?,
        status: parsed_at(row, TABLE, "status")?,
        created_at: timestamp_at(row, TABLE, "created_at")?,
    };

    let reply = match optional_uuid_at(row, "message_replies", "reply_id")? {
        Some(reply_id) => Some(MessageReply {
            id: reply_id,
            message_id: message.id,
            admin_id: optional_uuid_at(row, "message_replies", "reply_admin_id")?,
            admin_name: row.try_get("reply_admin_name")?,
            content: row.try_get("reply_content")?,
            created_at: timestamp_at(row, "message_replies", "reply_created_at")?,
        }),
        None => None,
    };

    Ok(MessageThread { message, reply })
}
