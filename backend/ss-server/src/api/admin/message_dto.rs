use ss_core::MessageReply;
use ss_db::MessageThread;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDto {
    pub id: String,
    /// Null once the replying admin account has been deleted
    pub admin_id: Option<String>,
    pub admin_name: String,
    pub content: String,
    pub created_at: String,
}

impl From<MessageReply> for ReplyDto {
    fn from(r: MessageReply) -> Self {
        Self {
            id: r.id.to_string(),
            admin_id: r.admin_id.map(|id| id.to_string()),
            admin_name: r.admin_name,
            content: r.content,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub created_at: String,
    pub reply: Option<ReplyDto>,
}

impl From<MessageThread> for MessageDto {
    fn from(thread: MessageThread) -> Self {
        let m = thread.message;
        Self {
            id: m.id.to_string(),
            status: m.status.as_str().to_string(),
            created_at: m.created_at.to_rfc3339(),
            name: m.name,
            email: m.email,
            message: m.body,
            reply: thread.reply.map(ReplyDto::from),
        }
    }
}
