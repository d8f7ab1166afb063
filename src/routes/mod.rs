pub mod auth;
pub mod championships;
pub mod health;
pub mod users;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::AppState;

/// Build the application router over a shared store.
///
/// Methods and headers are mirrored from the preflight request because
/// wildcards are not allowed together with credentials.
pub fn router(state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([cors_origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        // Root and health
        .route("/", get(|| async { concat!("League API - v", env!("CARGO_PKG_VERSION")) }))
        .route("/health", get(health::health_check))

        // Credential endpoints
        .route("/api/login", post(auth::login))
        .route("/api/register", post(auth::register))
        .route("/api/users/{email}", get(users::get_user))

        // Championship endpoints
        .route("/api/campeonatos", get(championships::get_championships))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
