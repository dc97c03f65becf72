mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod verifier_kind;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use verifier_kind::VerifierKind;

const CONFIG_DIR_ENV: &str = "SS_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".skillswap";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "skillswap.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 64;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_LOOKUP_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
const MAX_LOOKUP_TIMEOUT_SECS: u64 = 120;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
