//! Url record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A completed short link record.
///
/// `short_code` is always the base-62 encoding of `id`. Records are immutable
/// once the code is attached; there is no update or delete path. Rows whose
/// code has not been committed yet never surface as this type — the read
/// queries filter them out.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, original_url: String, short_code: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            10_000,
            "http://www.example.com".to_string(),
            "2bI".to_string(),
            now,
        );

        assert_eq!(record.id, 10_000);
        assert_eq!(record.original_url, "http://www.example.com");
        assert_eq!(record.short_code, "2bI");
        assert_eq!(record.created_at, now);
    }
}
