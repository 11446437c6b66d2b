//! Repository trait for URL record data access.

use crate::domain::entities::{NewWebUrl, WebUrl};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Aggregate counts over the record store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlSummary {
    pub total: i64,
    pub live: i64,
    pub expired: i64,
    pub total_clicks: i64,
}

/// Repository interface for URL records keyed by suffix.
///
/// Each method is a single statement against the backing store, so every call
/// commits on its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgWebUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_web_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebUrlRepository: Send + Sync {
    /// Finds a record by its suffix (case-sensitive). Expired records are returned too.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_suffix(&self, suffix: &str) -> Result<Option<WebUrl>, AppError>;

    /// Inserts a new record with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the suffix is already taken.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewWebUrl) -> Result<WebUrl, AppError>;

    /// Deletes a record by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if it was already gone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically adds one to the click counter and returns the updated record.
    ///
    /// Returns `Ok(None)` if the record no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, id: i64) -> Result<Option<WebUrl>, AppError>;

    /// Deletes every record whose `expires_at` is before `now`.
    ///
    /// Returns the number of deleted rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;

    /// Counts records and clicks, splitting live from expired at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn summary(&self, now: DateTime<Utc>) -> Result<UrlSummary, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
