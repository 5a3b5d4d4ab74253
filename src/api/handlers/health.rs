use crate::types::{HealthResponse, MessageResponse};
use axum::Json;

/// API liveness banner
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Stock Toolbox API is running".to_string(),
    })
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
