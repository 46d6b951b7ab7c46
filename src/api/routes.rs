use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware;

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // The selection control reads from here
        .route("/titles", get(handlers::get_titles))
        // The action button posts here
        .route("/recommendations", post(handlers::recommend))
        .layer(TraceLayer::new_for_http().make_span_with(middleware::make_span))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
