//! In-process cache implementation.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Unbounded in-memory cache for resolved short links.
///
/// The default backend when Redis is not configured. Entries live for the
/// lifetime of the process; resolved mappings never change, so there is
/// nothing to evict or invalidate.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        let url = self.entries.read().await.get(short_code).cloned();
        if url.is_some() {
            debug!("Cache HIT: {}", short_code);
        }
        Ok(url)
    }

    async fn set_url(&self, short_code: &str, original_url: &str) -> CacheResult<()> {
        self.entries
            .write()
            .await
            .insert(short_code.to_string(), original_url.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_miss_then_hit() {
        let cache = MemoryCache::new();

        assert_eq!(cache.get_url("2bI").await.unwrap(), None);

        cache.set_url("2bI", "http://www.example.com").await.unwrap();
        assert_eq!(
            cache.get_url("2bI").await.unwrap(),
            Some("http://www.example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_health_check_always_ok() {
        assert!(MemoryCache::new().health_check().await);
    }
}
