//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Versioned API routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create (or return the existing) short link
pub fn routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
