//! Short link creation service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::url_normalizer::normalize_url;

/// Rounds of dedup-lookup/insert before a creation race is reported upward.
const MAX_CREATE_ATTEMPTS: usize = 3;

/// Service that maps long URLs to deterministic short codes.
///
/// Codes are the base-62 encoding of the store-assigned identity, so the
/// service never generates random codes and never needs collision retries on
/// the code itself. Concurrency control is delegated entirely to the store's
/// uniqueness constraints.
pub struct ShortenerService {
    repository: Arc<dyn UrlRepository>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns the short code for `url`, creating a record when none exists.
    ///
    /// Idempotent: repeated calls with the same URL — or URLs that normalize
    /// identically — return the same code and leave exactly one stored
    /// record. The creation path performs two writes (insert for the
    /// identity, then code attachment); the dedup-hit path performs none.
    ///
    /// # Concurrency
    ///
    /// Two first-time calls for the same URL can both miss the dedup lookup.
    /// The unique constraint on the original URL rejects the second insert;
    /// that conflict is resolved here by re-running the lookup, never
    /// surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failure or if the creation
    /// race does not converge within [`MAX_CREATE_ATTEMPTS`] rounds.
    pub async fn shorten(&self, url: &str) -> Result<String, AppError> {
        let normalized_url = normalize_url(url);

        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            if let Some(existing) = self
                .repository
                .find_by_original_url(&normalized_url)
                .await?
            {
                return Ok(existing.short_code);
            }

            match self.repository.insert(&normalized_url).await {
                Ok(id) => return self.attach_code(id).await,
                Err(AppError::Conflict { .. }) => {
                    // A concurrent writer inserted the same URL first; its
                    // code becomes visible once attached.
                    debug!(attempt, url = %normalized_url, "lost creation race, retrying lookup");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Short link creation did not converge",
            json!({ "url": normalized_url, "attempts": MAX_CREATE_ATTEMPTS }),
        ))
    }

    /// Encodes the assigned identity and commits the code onto the record.
    async fn attach_code(&self, id: i64) -> Result<String, AppError> {
        let code = base62::encode(id);

        match self.repository.attach_code(id, &code).await {
            Ok(()) => Ok(code),
            Err(AppError::Conflict { .. }) => {
                // Unreachable while identities stay unique and the encoding
                // injective; a hit here means the store invariant is broken.
                Err(AppError::internal(
                    "Derived short code collided with an existing record",
                    json!({ "id": id, "code": code }),
                ))
            }
            Err(e) => Err(e),
        }
    }
}
