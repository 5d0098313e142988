//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "www.example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "code": "2bI", "short_url": "https://sn.ip/2bI" }
/// ```
///
/// Shortening is idempotent: resubmitting a URL returns the code it was
/// assigned the first time.
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is empty or longer than the storage
/// bound. No URL syntax validation happens here — the core's scheme-prefix
/// rule is the only canonicalization.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let code = state.shortener_service.shorten(&payload.url).await?;
    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), code);

    Ok(Json(ShortenResponse { code, short_url }))
}
