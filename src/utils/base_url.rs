//! Service base address resolution for composing short URLs.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Ensures a configured base address ends with exactly one `/`.
pub fn normalize_base_url(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

/// Derives the service base address (`scheme://host[:port]/`) from a request.
///
/// The `Host` header is used as sent, port included. HTTP/2 clients carry the
/// host in the `:authority` pseudo-header instead, which ends up in the request
/// URI, so the URI authority is used when `Host` is absent. The scheme is
/// `https` when a trusted `X-Forwarded-Proto` says so, otherwise the URI scheme
/// if it has one, otherwise `http`.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if:
/// - Neither a `Host` header nor a URI authority is present
/// - The `Host` header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let base = base_url_from_request(&headers, &Uri::from_static("/shorten"), false).unwrap();
/// assert_eq!(base, "http://example.com:8080/");
/// ```
pub fn base_url_from_request(
    headers: &HeaderMap,
    uri: &Uri,
    trust_forwarded: bool,
) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .trim(),
        None => uri.authority().map_or("", |authority| authority.as_str()),
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    let forwarded = trust_forwarded
        && headers
            .get(FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"));

    let scheme = if forwarded || uri.scheme_str() == Some("https") {
        "https"
    } else {
        "http"
    };

    Ok(format!("{scheme}://{host}/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, Uri, header};

    fn path_only() -> Uri {
        Uri::from_static("/shorten")
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("https://s.example.com"), "https://s.example.com/");
        assert_eq!(normalize_base_url("https://s.example.com/"), "https://s.example.com/");
        assert_eq!(normalize_base_url("https://s.example.com//"), "https://s.example.com/");
    }

    #[test]
    fn test_base_url_simple_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("test"));

        assert_eq!(base_url_from_request(&headers, &path_only(), false).unwrap(), "http://test/");
    }

    #[test]
    fn test_base_url_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8000"));

        assert_eq!(
            base_url_from_request(&headers, &path_only(), false).unwrap(),
            "http://localhost:8000/"
        );
    }

    #[test]
    fn test_forwarded_proto_ignored_without_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https"));

        assert_eq!(
            base_url_from_request(&headers, &path_only(), false).unwrap(),
            "http://s.example.com/"
        );
    }

    #[test]
    fn test_forwarded_proto_behind_proxy() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https, http"));

        assert_eq!(
            base_url_from_request(&headers, &path_only(), true).unwrap(),
            "https://s.example.com/"
        );
    }

    #[test]
    fn test_missing_host() {
        let headers = HeaderMap::new();
        let result = base_url_from_request(&headers, &path_only(), false);

        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn test_host_header_wins_over_uri_authority() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        let uri = Uri::from_static("http://other.example/shorten");

        assert_eq!(
            base_url_from_request(&headers, &uri, false).unwrap(),
            "http://s.example.com/"
        );
    }

    #[test]
    fn test_http2_authority_without_host_header() {
        let headers = HeaderMap::new();
        let uri = Uri::from_static("http://short.example:8000/shorten");

        assert_eq!(
            base_url_from_request(&headers, &uri, false).unwrap(),
            "http://short.example:8000/"
        );
    }

    #[test]
    fn test_https_uri_scheme_kept() {
        let headers = HeaderMap::new();
        let uri = Uri::from_static("https://short.example/shorten");

        assert_eq!(
            base_url_from_request(&headers, &uri, false).unwrap(),
            "https://short.example/"
        );
    }
}
