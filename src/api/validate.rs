use axum::{
    extract::Request,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::error::{AppError, Result};
use crate::models::card::{CardValidation, ValidateCardRequest};

/// Upper bound on the request body; larger bodies are rejected as unreadable
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Validates a card number posted as `{"card_number": "..."}`
///
/// Returns the Luhn result and the issuer classification as JSON.
#[tracing::instrument(skip_all)]
async fn validate_card(request: Request) -> Result<Response> {
    let body = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(AppError::BodyRead)?;

    let payload: ValidateCardRequest = serde_json::from_slice(&body)?;

    let validation = CardValidation::evaluate(payload.card_number);

    tracing::info!(
        card = %validation.masked_number(),
        issuer = %validation.issuer,
        is_valid = validation.is_valid,
        "Card validated"
    );

    // Serialization failures are server-side, not the client's JSON
    let json = serde_json::to_vec(&validation).map_err(|e| AppError::Internal(e.into()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], json).into_response())
}

pub fn router() -> Router {
    Router::new().route("/validate", get(validate_card).post(validate_card))
}
