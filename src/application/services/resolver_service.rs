//! Short code resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Service that resolves short codes back to their original URLs.
///
/// Owns the read-through cache: lookups consult it first and populate it only
/// after a confirmed store hit. Cached pairs are immutable, so nothing is
/// ever invalidated.
pub struct ResolverService {
    repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
}

impl ResolverService {
    /// Creates a new resolver service.
    pub fn new(repository: Arc<dyn UrlRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Resolves a short code to its original URL.
    ///
    /// Cache failures degrade to store lookups; an unknown code leaves the
    /// cache untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no record carries the code.
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        if let Ok(Some(cached_url)) = self.cache.get_url(short_code).await {
            debug!(code = short_code, "resolved from cache");
            return Ok(cached_url);
        }

        let record = self
            .repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": short_code }))
            })?;

        if let Err(e) = self.cache.set_url(short_code, &record.original_url).await {
            warn!(code = short_code, error = %e, "failed to cache resolved URL");
        }

        Ok(record.original_url)
    }
}
