pub mod message_reply_repository;
pub mod message_repository;
pub mod profile_repository;
pub mod settings_repository;
pub mod skill_repository;
pub mod user_repository;

mod row;
