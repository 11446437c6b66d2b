//! Redirect resolution with expiry policy and click counting.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::repositories::WebUrlRepository;
use crate::error::AppError;

/// Service resolving suffixes to their destination for redirects.
pub struct RedirectService<R: WebUrlRepository> {
    repository: Arc<R>,
}

impl<R: WebUrlRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves `suffix` to its original URL and counts the visit.
    ///
    /// Expired records are reported but left in place; they are only removed
    /// when their suffix is reclaimed or by the expiry sweeper.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this suffix.
    /// Returns [`AppError::Expired`] if the record is past its expiry.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, suffix: &str) -> Result<String, AppError> {
        let web_url = self
            .repository
            .find_by_suffix(suffix)
            .await?
            .ok_or_else(|| not_found(suffix))?;

        if web_url.is_expired_at(Utc::now()) {
            return Err(AppError::expired(
                "Short URL has expired, please create a new one",
                json!({ "suffix": suffix, "expired_at": web_url.expires_at }),
            ));
        }

        // The row can vanish between lookup and update if the suffix is reclaimed.
        let updated = self
            .repository
            .increment_clicks(web_url.id)
            .await?
            .ok_or_else(|| not_found(suffix))?;

        tracing::debug!(suffix, clicks = updated.clicks, "Resolved short URL");

        Ok(updated.original_url)
    }
}

fn not_found(suffix: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "suffix": suffix }))
}
