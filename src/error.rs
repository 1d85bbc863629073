use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("error reading request body")]
    BodyRead(#[source] axum::Error),

    #[error("Invalid JSON payload")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BodyRead(_) | AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self {
            AppError::Internal(e) => tracing::error!(error = ?e, "Request failed"),
            AppError::BodyRead(e) => tracing::warn!(error = %e, "{}", self),
            AppError::InvalidJson(e) => tracing::warn!(error = %e, "{}", self),
        }

        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
