//! DTOs for the record info endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::WebUrl;

/// Full metadata of a short link.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub id: i64,
    pub original_url: String,
    pub suffix: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<WebUrl> for InfoResponse {
    fn from(web_url: WebUrl) -> Self {
        Self {
            id: web_url.id,
            original_url: web_url.original_url,
            suffix: web_url.suffix,
            clicks: web_url.clicks,
            created_at: web_url.created_at,
            expires_at: web_url.expires_at,
        }
    }
}
