pub mod local_user;
pub mod message;
pub mod message_reply;
pub mod message_status;
pub mod role;
pub mod skill;
pub mod skill_status;
pub mod system_settings;
pub mod user_profile;
pub mod user_status;
pub mod verified_identity;
