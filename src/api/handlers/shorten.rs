//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State};
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// The body is decoded as JSON whatever `Content-Type` the client sends, so
/// `curl -d '{"long_url":"..."}'` works without an explicit header.
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/aZ3k9Q",
///   "long_url": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `{ "error": "..." }` if the body is not
/// valid JSON or `long_url` is missing or blank.
/// Returns 500 if no unique code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let payload: ShortenRequest = serde_json::from_slice(&body)?;
    payload.validate()?;

    let code = state.registry.create(&payload.long_url).await?;
    let short_url = state.short_url(&code);

    info!(code = %code, long_url = %payload.long_url, "Short link created");

    Ok(Json(ShortenResponse {
        short_url,
        long_url: payload.long_url,
    }))
}
