pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::message_reply_repository::MessageReplyRepository;
pub use repositories::message_repository::{MessageRepository, MessageThread};
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::settings_repository::SettingsRepository;
pub use repositories::skill_repository::{SkillRepository, SkillWithAuthor};
pub use repositories::user_repository::UserRepository;
