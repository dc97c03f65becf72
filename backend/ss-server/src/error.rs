use thiserror::Error;

/// Startup failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ss_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ss_db::DbError),

    #[error("Identity verifier error: {0}")]
    Verifier(#[from] ss_auth::AuthError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
