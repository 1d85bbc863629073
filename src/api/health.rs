use axum::{http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Health check endpoint
/// The service holds no dependencies, so it is healthy whenever it can answer
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    tracing::debug!(status = %response.status, "Health check completed");

    (StatusCode::OK, Json(response))
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
