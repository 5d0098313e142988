//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur while setting up a cache backend.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching resolved short link mappings.
///
/// Implementations must be thread-safe and fail open: a cache failure
/// degrades to a store lookup, it never fails the request. The cache is a
/// read-through accelerator owned by the resolver — written only after a
/// confirmed store hit and never treated as authoritative.
///
/// Entries carry no TTL and are never invalidated. A stored
/// `(code, original_url)` pair is immutable, so a populated entry cannot go
/// stale.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::MemoryCache`] - unbounded in-process map
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the original URL for a short code.
    ///
    /// Returns `Ok(None)` on a miss; backend errors are logged and also read
    /// as a miss.
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Stores a resolved mapping.
    ///
    /// Backend errors are logged and swallowed so the request flow is never
    /// disrupted.
    async fn set_url(&self, short_code: &str, original_url: &str) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    ///
    /// Used by the health check endpoint.
    async fn health_check(&self) -> bool;
}
