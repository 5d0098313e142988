//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// The transport only bounds the length to the storage column limit; scheme
/// handling and deduplication happen in the core.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 2048, message = "url must be 1 to 2048 characters"))]
    pub url: String,
}

/// Response for a created or deduplicated short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The bare short code.
    pub code: String,
    /// The code joined onto the configured public base URL.
    pub short_url: String,
}
