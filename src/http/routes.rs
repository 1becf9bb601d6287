use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session views
        .route("/session", get(handlers::get_session))
        .route("/session/metrics", get(handlers::get_metrics))
        .route("/session/conversation", get(handlers::get_conversation))
        .route("/session/render", get(handlers::get_render))
        // Browser front ends are served from another origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
