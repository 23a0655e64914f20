/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * public and protected route tables into a single Axum router.
 *
 * # Layers
 *
 * - Permissive CORS, since browser clients are served from other origins
 * - A JSON 404 fallback for unknown routes
 */

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared across handlers
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes())
        .fallback(fallback_404)
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// JSON 404 for unknown routes
async fn fallback_404() -> ApiError {
    ApiError::not_found("Route")
}
