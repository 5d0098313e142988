//! URL normalization.

/// Normalizes a URL to the canonical form used for storage and deduplication.
///
/// The single rule: inputs that do not already start with `http://` or
/// `https://` get an `http://` prefix. Nothing else is touched — no trimming,
/// case folding, or percent-decoding — so lookups stay byte-exact against
/// what was stored.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("http://{input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_scheme_when_missing() {
        assert_eq!(normalize_url("www.example.com"), "http://www.example.com");
    }

    #[test]
    fn test_keeps_http_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_keeps_https_scheme() {
        assert_eq!(
            normalize_url("https://example.com/path?q=1"),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_does_not_case_fold_or_trim() {
        assert_eq!(
            normalize_url(" Example.COM/Path "),
            "http:// Example.COM/Path "
        );
    }

    #[test]
    fn test_scheme_check_is_case_sensitive() {
        // "HTTP://" is not a recognized prefix, so it is treated as a bare host.
        assert_eq!(normalize_url("HTTP://example.com"), "http://HTTP://example.com");
    }
}
