pub mod cors;
pub mod handlers;
pub mod logging;

use std::sync::Arc;

use axum::middleware as axum_middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::backend::Backend;

use self::cors::CorsPolicy;
use self::handlers::AppState;

/// Build the axum router: recipe proxy, key disclosure, and health routes
/// behind the origin-check and logging middleware.
pub fn build_router(
    backend: Arc<dyn Backend>,
    cors_policy: Arc<CorsPolicy>,
    secret_key: Option<String>,
) -> Router {
    let state = Arc::new(AppState {
        backend,
        secret_key,
    });

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/mistral", post(handlers::generate_recipe))
        .route("/api/key", get(handlers::disclose_key))
        .layer(axum_middleware::from_fn_with_state(
            cors_policy,
            cors::cors_middleware,
        ))
        .layer(axum_middleware::from_fn(logging::request_logging))
        .with_state(state)
}
