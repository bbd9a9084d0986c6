//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub weather: String,
    pub assistant: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let weather = if state.config.weather.api_key.is_empty() {
        "unconfigured".to_string()
    } else {
        "configured".to_string()
    };
    let assistant = if state.config.assistant.api_key.is_empty() {
        "disabled".to_string()
    } else {
        "configured".to_string()
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        weather,
        assistant,
    })
}
