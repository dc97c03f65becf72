use crate::api::admin::{messages, settings, skills, stats, users};
use crate::api::auth::sessions;
use crate::api::contact::contact;
use crate::app_state::AppState;
use crate::health;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use log::warn;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Session endpoints
        .route("/auth/register", post(sessions::register))
        .route("/auth/status", get(sessions::status))
        .route("/auth/verify-email", post(sessions::verify_email))
        .route("/auth/google", post(sessions::google_sign_in))
        .route("/auth/login", post(sessions::login))
        // Public contact form
        .route("/contact", post(contact::submit_contact))
        // Admin console
        .route("/admin/stats", get(stats::get_stats))
        .route(
            "/admin/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/admin/users", get(users::list_users))
        .route(
            "/admin/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/admin/skills",
            get(skills::list_skills).post(skills::create_skill),
        )
        .route(
            "/admin/skills/{id}",
            get(skills::get_skill)
                .patch(skills::update_skill)
                .delete(skills::delete_skill),
        )
        .route("/admin/messages", get(messages::list_messages))
        .route(
            "/admin/messages/{id}",
            get(messages::get_message)
                .patch(messages::update_message)
                .delete(messages::delete_message),
        )
        .route(
            "/admin/messages/{id}/reply",
            post(messages::reply_to_message),
        )
        .with_state(state)
        .layer(cors_layer(cors_origins))
}

/// An empty origin list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
