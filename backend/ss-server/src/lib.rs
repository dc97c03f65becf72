pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::{
    envelope::Envelope,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        admin_principal::AdminPrincipal, bearer_credential::BearerCredential, json_body::JsonBody,
    },
};
pub use app_state::AppState;
pub use session::{Principal, SessionBridge, SessionError};

pub use crate::routes::build_router;
