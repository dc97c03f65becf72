use crate::session::SessionBridge;

use ss_auth::IdentityVerifier;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    pub fn new(pool: SqlitePool, verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self { pool, verifier }
    }

    pub fn session(&self) -> SessionBridge {
        SessionBridge::new(self.pool.clone(), Arc::clone(&self.verifier))
    }
}
