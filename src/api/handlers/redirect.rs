//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Answers `301 Moved Permanently` with the stored target in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found with a plain text body if the code is unknown or
/// has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.registry.resolve(&code).await?;

    let location = HeaderValue::from_str(&target)
        .map_err(|_| AppError::internal("Stored URL is not a valid Location header"))?;

    debug!(code = %code, target = %target, "Redirecting");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
