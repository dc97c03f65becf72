pub mod error;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::local_user::LocalUser;
pub use models::message::Message;
pub use models::message_reply::MessageReply;
pub use models::message_status::MessageStatus;
pub use models::role::Role;
pub use models::skill::Skill;
pub use models::skill_status::SkillStatus;
pub use models::system_settings::SystemSettings;
pub use models::user_profile::UserProfile;
pub use models::user_status::UserStatus;
pub use models::verified_identity::VerifiedIdentity;

#[cfg(test)]
mod tests;
