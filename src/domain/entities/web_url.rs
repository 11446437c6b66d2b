//! URL record entity representing a short suffix mapped to its destination.

use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

/// Lifetime of every short link, counted from its creation.
pub const LINK_TTL_DAYS: i64 = 3;

/// Returns the fixed time-to-live applied to new records.
pub fn link_ttl() -> Duration {
    Duration::days(LINK_TTL_DAYS)
}

/// A persisted short link.
///
/// `expires_at` is fixed at creation and never renewed. `clicks` only grows,
/// one step per successful redirect.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct WebUrl {
    pub id: i64,
    pub original_url: String,
    pub suffix: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl WebUrl {
    /// Returns true if the record was past its expiry at `now`.
    ///
    /// A record whose `expires_at` equals `now` is still live.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Returns true if the record has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWebUrl {
    pub original_url: String,
    pub suffix: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl NewWebUrl {
    /// Builds a record that starts at `now` and expires one TTL later.
    pub fn starting_at(original_url: String, suffix: String, now: DateTime<Utc>) -> Self {
        Self {
            original_url,
            suffix,
            created_at: now,
            expires_at: now + link_ttl(),
        }
    }
}
