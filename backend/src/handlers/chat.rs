//! HTTP handler for the irrigation chat assistant

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Request body for the chat endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub forecast_id: Option<i64>,
}

/// Chat reply
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Relay a grower message to the assistant
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation {
            field: "message".to_string(),
            message: "message must not be empty".to_string(),
        });
    }

    let reply = state
        .assistant
        .chat(&request.message, request.forecast_id)
        .await?;
    Ok(Json(ChatResponse { reply }))
}
