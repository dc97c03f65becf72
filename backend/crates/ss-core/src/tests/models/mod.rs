mod local_user;
mod message;
mod role;
mod skill;
mod skill_status;
mod system_settings;
mod user_status;
