use crate::{DbError, Result as DbErrorResult};

use ss_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// Open the application database, creating the file and its directory if needed.
pub async fn open_pool(database_path: &Path, max_connections: u32) -> DbErrorResult<SqlitePool> {
    if let Some(parent) = database_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| DbError::Initialization {
            message: format!("Cannot create {}: {}", parent.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!("Database connection established: {}", database_path.display());

    Ok(pool)
}

/// Apply pending migrations. The initial migration also seeds the settings row.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    let location = ErrorLocation::from(Location::caller());

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location,
        })?;

    info!("Migrations complete");

    Ok(())
}
