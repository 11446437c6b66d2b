#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use web_url_shortener::infrastructure::persistence::PgWebUrlRepository;
use web_url_shortener::state::AppState;
use web_url_shortener::utils::suffix_generator::SuffixGenerator;

pub const TEST_BASE_URL: &str = "http://test";
pub const TEST_URL: &str = "https://www.youtube.com/watch?v=R_wscUcbynk";

/// Inserts a record that expires at `expires_at`, three days after its creation.
pub async fn insert_web_url(
    pool: &PgPool,
    suffix: &str,
    url: &str,
    expires_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO web_urls (original_url, suffix, created_at, expires_at)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(url)
    .bind(suffix)
    .bind(expires_at - Duration::days(3))
    .bind(expires_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_live_url(pool: &PgPool, suffix: &str, url: &str) -> i64 {
    insert_web_url(pool, suffix, url, Utc::now() + Duration::days(3)).await
}

pub async fn create_expired_url(pool: &PgPool, suffix: &str, url: &str) -> i64 {
    insert_web_url(pool, suffix, url, Utc::now() - Duration::days(1)).await
}

pub async fn get_clicks(pool: &PgPool, suffix: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM web_urls WHERE suffix = $1")
        .bind(suffix)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_by_suffix(pool: &PgPool, suffix: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM web_urls WHERE suffix = $1")
        .bind(suffix)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// State with a fixed base address of `http://test/`.
pub fn create_test_state(pool: PgPool) -> AppState {
    build_state(pool, Some(TEST_BASE_URL.to_string()))
}

/// State that derives the base address from the `Host` header.
pub fn create_host_derived_state(pool: PgPool) -> AppState {
    build_state(pool, None)
}

fn build_state(pool: PgPool, base_url: Option<String>) -> AppState {
    let repository = Arc::new(PgWebUrlRepository::new(Arc::new(pool)));

    AppState::new(
        repository,
        Arc::new(SuffixGenerator::new()),
        10,
        base_url,
        false,
    )
}
