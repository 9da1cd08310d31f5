//! URL normalization for user-entered bookmark addresses
//!
//! Applied by callers before handing a URL to the mutation API.

/// Scheme prefixes accepted as-is
const KNOWN_SCHEMES: &[&str] = &[
    "http://",
    "https://",
    "ftp://",
    "file://",
    "mailto:",
    "about:",
    "chrome://",
    "edge://",
];

/// Prepend `https://` unless the input already starts with a known scheme
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    if KNOWN_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com/path "), "https://example.com/path");
    }

    #[test]
    fn test_known_schemes_kept() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("HTTPS://Example.com"), "HTTPS://Example.com");
        assert_eq!(normalize_url("mailto:a@b.c"), "mailto:a@b.c");
        assert_eq!(normalize_url("file:///tmp/x.html"), "file:///tmp/x.html");
    }

    #[test]
    fn test_http_prefixed_host_is_not_a_scheme() {
        assert_eq!(normalize_url("httpbin.org"), "https://httpbin.org");
    }
}
