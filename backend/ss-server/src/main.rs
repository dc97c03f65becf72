use ss_server::error::{Result as ServerErrorResult, ServerError};
use ss_server::{AppState, build_router, logger};

use ss_auth::{IdentityVerifier, JwtIdentityVerifier, LookupIdentityVerifier};
use ss_config::{Config, VerifierKind};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A missing .env is normal outside development
    let dotenv = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = if let Some(ref filename) = config.logging.file {
        let log_dir = config.log_dir()?;
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ss-server v{}", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    // Database
    let database_path = config.database_path()?;
    let pool = ss_db::open_pool(&database_path, config.database.max_connections).await?;
    ss_db::run_migrations(&pool).await?;

    let verifier = build_verifier(&config)?;
    info!("Identity verifier: {}", verifier.name());

    let app = build_router(AppState::new(pool, verifier), &config.server.cors_origins);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

fn build_verifier(config: &Config) -> ServerErrorResult<Arc<dyn IdentityVerifier>> {
    let auth = &config.auth;
    let project_id = auth.project_id.as_deref();

    if project_id.is_none() {
        warn!("auth.project_id not set: token issuer and audience are not checked");
    }

    match auth.verifier {
        VerifierKind::Jwt => {
            if let Some(ref secret) = auth.jwt_secret {
                info!("JWT: HS256 verification enabled");
                return Ok(Arc::new(JwtIdentityVerifier::with_hs256(
                    secret.as_bytes(),
                    project_id,
                )));
            }

            let config_dir = Config::config_dir()?;
            let key_path = auth.public_key_path(&config_dir).ok_or_else(|| {
                ServerError::Config(ss_config::ConfigError::auth(
                    "auth.verifier = \"jwt\" requires jwt_secret or jwt_public_key_path",
                ))
            })?;
            let public_key =
                std::fs::read_to_string(&key_path).map_err(|e| ServerError::JwtKeyFile {
                    path: key_path.display().to_string(),
                    source: e,
                })?;

            info!("JWT: RS256 verification enabled");
            Ok(Arc::new(JwtIdentityVerifier::with_rs256(
                &public_key,
                project_id,
            )?))
        }
        VerifierKind::Lookup => {
            let api_key = auth.lookup_api_key.as_deref().ok_or_else(|| {
                ServerError::Config(ss_config::ConfigError::auth(
                    "auth.verifier = \"lookup\" requires lookup_api_key",
                ))
            })?;

            Ok(Arc::new(LookupIdentityVerifier::new(
                &auth.lookup_base_url,
                api_key,
                Duration::from_secs(auth.lookup_timeout_secs),
            )?))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
