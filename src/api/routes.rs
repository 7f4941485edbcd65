//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes of the shortener.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link
/// - `GET  /{code}`  - Redirect to the stored target
///
/// Any other method on these paths is answered with `405 Method Not Allowed`.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
}
