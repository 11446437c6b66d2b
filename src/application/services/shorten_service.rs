//! Short link creation: suffix resolution, expired slot reclamation, and insert.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewWebUrl, WebUrl};
use crate::domain::repositories::WebUrlRepository;
use crate::error::AppError;
use crate::utils::suffix_generator::GenerateSuffix;
use crate::utils::url_validator::parse_http_url;

/// Path segment placed between the service base address and the suffix.
pub const REDIRECT_PATH_PREFIX: &str = "r/";

/// Default number of generated candidates tried before giving up.
pub const DEFAULT_MAX_SUFFIX_ATTEMPTS: usize = 10;

/// Service for creating short links.
///
/// Suffixes are either supplied by the caller or drawn from a
/// [`GenerateSuffix`] source. A suffix held by an expired record is reclaimed
/// by deleting that record first.
pub struct ShortenService<R: WebUrlRepository, G: GenerateSuffix> {
    repository: Arc<R>,
    generator: Arc<G>,
    max_attempts: usize,
}

impl<R: WebUrlRepository, G: GenerateSuffix> ShortenService<R, G> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<R>, generator: Arc<G>, max_attempts: usize) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Creates a short link for `original_url`.
    ///
    /// An empty `custom_suffix` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute HTTP(S) URL.
    ///
    /// Returns [`AppError::Conflict`] if the custom suffix belongs to a live record.
    ///
    /// Returns [`AppError::ResourceExhausted`] if no free suffix was found within
    /// the attempt budget.
    pub async fn create_short_url(
        &self,
        original_url: &str,
        custom_suffix: Option<String>,
    ) -> Result<WebUrl, AppError> {
        let original_url = parse_http_url(original_url).map_err(|e| {
            AppError::validation("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        match custom_suffix.filter(|s| !s.is_empty()) {
            Some(suffix) => self.create_with_custom_suffix(original_url, suffix).await,
            None => self.create_with_generated_suffix(original_url).await,
        }
    }

    /// Composes the public short URL: `{base_url}r/{suffix}`.
    ///
    /// `base_url` is expected to end with `/`.
    pub fn short_url(&self, base_url: &str, suffix: &str) -> String {
        format!("{base_url}{REDIRECT_PATH_PREFIX}{suffix}")
    }

    async fn create_with_custom_suffix(
        &self,
        original_url: String,
        suffix: String,
    ) -> Result<WebUrl, AppError> {
        let now = Utc::now();

        if let Some(existing) = self.repository.find_by_suffix(&suffix).await? {
            if !existing.is_expired_at(now) {
                return Err(suffix_in_use(&suffix));
            }
            self.reclaim(&existing).await?;
        }

        let new_url = NewWebUrl::starting_at(original_url, suffix.clone(), now);

        match self.repository.create(new_url).await {
            Err(AppError::Conflict { .. }) => Err(suffix_in_use(&suffix)),
            result => result,
        }
    }

    async fn create_with_generated_suffix(&self, original_url: String) -> Result<WebUrl, AppError> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate();
            let now = Utc::now();

            if let Some(existing) = self.repository.find_by_suffix(&candidate).await? {
                if existing.is_expired_at(now) {
                    self.reclaim(&existing).await?;
                }
                debug!(attempt, suffix = %candidate, "Generated suffix collided");
                continue;
            }

            let new_url = NewWebUrl::starting_at(original_url.clone(), candidate, now);

            match self.repository.create(new_url).await {
                Ok(created) => return Ok(created),
                Err(AppError::Conflict { .. }) => {
                    warn!(attempt, "Suffix taken by a concurrent insert, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::resource_exhausted(
            "Failed to generate a unique suffix",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Deletes an expired record so its suffix can be reused.
    async fn reclaim(&self, expired: &WebUrl) -> Result<(), AppError> {
        if self.repository.delete(expired.id).await? {
            info!(suffix = %expired.suffix, id = expired.id, "Reclaimed expired suffix");
        }
        Ok(())
    }
}

fn suffix_in_use(suffix: &str) -> AppError {
    AppError::conflict(
        "Custom suffix is already in use",
        json!({ "suffix": suffix }),
    )
}
