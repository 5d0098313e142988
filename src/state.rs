//! Shared application state.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ResolverService, ShortenerService};
use crate::infrastructure::cache::CacheService;

/// Application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool, used directly only by the health check.
    pub db: PgPool,
    /// Public base URL that short codes are joined onto in responses.
    pub base_url: String,
    pub shortener_service: Arc<ShortenerService>,
    pub resolver_service: Arc<ResolverService>,
    pub cache: Arc<dyn CacheService>,
}
