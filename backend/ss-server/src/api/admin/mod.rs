pub mod create_skill_request;
pub mod deleted_response;
pub mod message_dto;
pub mod messages;
pub mod reply_request;
pub mod settings;
pub mod settings_dto;
pub mod skill_dto;
pub mod skills;
pub mod stats;
pub mod stats_response;
pub mod update_message_request;
pub mod update_skill_request;
pub mod update_user_request;
pub mod user_dto;
pub mod users;
