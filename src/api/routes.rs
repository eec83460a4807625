use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/catalog", get(handlers::get_catalog))
        // Search
        .route("/search", post(handlers::submit_search))
        .route("/results", get(handlers::get_results))
        // Favorites
        .route("/favorites", get(handlers::get_favorites))
        .route("/favorites/toggle", post(handlers::toggle_favorite))
        .route("/favorites/:id", get(handlers::is_favorite))
        // Navigation
        .route("/navigate", post(handlers::navigate))
        .route("/session", get(handlers::get_session))
        // Poster enrichment
        .route("/posters/refresh", post(handlers::refresh_posters))
        // Film agent
        .route("/agent/ask", post(handlers::agent_ask))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
