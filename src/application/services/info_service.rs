//! Read-only record lookups.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::WebUrl;
use crate::domain::repositories::WebUrlRepository;
use crate::error::AppError;

/// Service returning record metadata without side effects.
pub struct InfoService<R: WebUrlRepository> {
    repository: Arc<R>,
}

impl<R: WebUrlRepository> InfoService<R> {
    /// Creates a new info service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the record for `suffix`, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this suffix.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_info(&self, suffix: &str) -> Result<WebUrl, AppError> {
        self.repository
            .find_by_suffix(suffix)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "suffix": suffix })))
    }
}
