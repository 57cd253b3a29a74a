//! Router configuration for the web server.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::about_page))
        .route(
            "/summarize",
            get(handlers::summarize_page).post(handlers::summarize_submit),
        )
        .route(
            "/entities",
            get(handlers::entities_page).post(handlers::entities_submit),
        )
        .route("/url", get(handlers::url_page).post(handlers::url_submit))
        // JSON API mirroring the core functions
        .route("/api/health", get(handlers::health))
        .route("/api/summarize", post(handlers::api_summarize))
        .route("/api/entities", post(handlers::api_entities))
        .route("/api/fetch", post(handlers::api_fetch))
        // Static assets
        .route("/static/style.css", get(handlers::serve_css))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
