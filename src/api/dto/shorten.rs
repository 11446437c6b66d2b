//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::url_validator::parse_http_url;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination URL (must be a valid HTTP/HTTPS URL).
    #[validate(custom(function = "validate_http_url"))]
    pub original_url: String,

    /// Optional alias used verbatim instead of a generated suffix.
    #[serde(default)]
    pub custom_suffix: Option<String>,
}

/// Accepts what the shortening service will store: an absolute HTTP(S) URL,
/// surrounding whitespace allowed.
fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    parse_http_url(value).map(|_| ()).map_err(|e| {
        ValidationError::new("url").with_message(format!("Invalid URL format: {e}").into())
    })
}

/// Result of a successful shortening.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
}
