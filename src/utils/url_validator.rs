//! Validation of destination URLs submitted for shortening.

use url::Url;

/// Longest destination URL accepted, in bytes.
pub const MAX_URL_LENGTH: usize = 2083;

/// Errors that can occur while validating a destination URL.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,
}

/// Parses an absolute HTTP(S) URL and returns its canonical serialization.
///
/// The serialization is what gets stored and later sent back in `Location`
/// headers. A bare host gains a trailing slash (`https://example.com` becomes
/// `https://example.com/`); query strings and paths are kept as sent.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparseable or relative URLs,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes,
/// [`UrlValidationError::MissingHost`] when there is no host, and
/// [`UrlValidationError::TooLong`] for oversized input.
pub fn parse_http_url(input: &str) -> Result<String, UrlValidationError> {
    let input = input.trim();

    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_with_query_is_unchanged() {
        let result = parse_http_url("https://www.youtube.com/watch?v=R_wscUcbynk");
        assert_eq!(
            result.unwrap(),
            "https://www.youtube.com/watch?v=R_wscUcbynk"
        );
    }

    #[test]
    fn test_bare_host_gets_trailing_slash() {
        assert_eq!(
            parse_http_url("https://example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_http_allowed() {
        assert!(parse_http_url("http://example.com/path").is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            parse_http_url("  https://example.com/a  ").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_not_a_url() {
        assert!(matches!(
            parse_http_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            parse_http_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
        assert_eq!(
            parse_http_url("ftp://example.com/file"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(parse_http_url(&long), Err(UrlValidationError::TooLong));
    }

    #[test]
    fn test_empty_string() {
        assert!(parse_http_url("").is_err());
    }
}
