//! Route definitions for the Irrigation Forecast Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Forecast creation and retrieval
        .nest("/forecasts", forecast_routes())
        // Crop and soil lookup tables
        .nest("/reference", reference_routes())
        // Forecast-aware chat assistant
        .route("/chat", post(handlers::chat))
}

/// Forecast routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_forecast))
        .route("/:forecast_id", get(handlers::get_forecast))
}

/// Reference data routes
fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/crops", get(handlers::list_crops))
        .route("/soils", get(handlers::list_soils))
}
