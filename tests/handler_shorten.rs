mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, Version, header},
    routing::post,
};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use web_url_shortener::api::handlers::shorten_handler;
use web_url_shortener::utils::suffix_generator::is_generated_shape;

fn shorten_router(state: web_url_shortener::AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state)
}

fn server(state: web_url_shortener::AppState) -> TestServer {
    TestServer::new(shorten_router(state)).unwrap()
}

#[sqlx::test]
async fn test_shorten_generated_suffix(pool: PgPool) {
    let server = server(common::create_test_state(pool.clone()));

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": common::TEST_URL }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], common::TEST_URL);
    assert!(json["expires_at"].is_string());

    let short_url = json["short_url"].as_str().unwrap();
    let suffix = short_url.strip_prefix("http://test/r/").unwrap();
    assert!(is_generated_shape(suffix));
    assert_eq!(common::count_by_suffix(&pool, suffix).await, 1);
}

#[sqlx::test]
async fn test_shorten_with_custom_suffix(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": common::TEST_URL,
            "custom_suffix": "Mario"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "http://test/r/Mario");
    assert_eq!(json["original_url"], common::TEST_URL);
}

#[sqlx::test]
async fn test_shorten_expiry_is_three_days(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let before = Utc::now();
    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com/ttl" }))
        .await;
    let after = Utc::now();

    let json = response.json::<serde_json::Value>();
    let expires_at: DateTime<Utc> = json["expires_at"].as_str().unwrap().parse().unwrap();

    // Stored timestamps are rounded to microseconds.
    let slack = Duration::milliseconds(1);
    assert!(expires_at >= before + Duration::days(3) - slack);
    assert!(expires_at <= after + Duration::days(3) + slack);
}

#[sqlx::test]
async fn test_shorten_custom_suffix_conflict(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    server
        .post("/shorten")
        .json(&json!({
            "original_url": common::TEST_URL,
            "custom_suffix": "Mario"
        }))
        .await
        .assert_status_ok();

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": "https://second.example.com",
            "custom_suffix": "Mario"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Custom suffix is already in use");
}

#[sqlx::test]
async fn test_shorten_custom_suffix_is_case_sensitive(pool: PgPool) {
    common::create_live_url(&pool, "mario", "https://lower.example.com/").await;
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": common::TEST_URL,
            "custom_suffix": "Mario"
        }))
        .await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_shorten_reclaims_expired_custom_suffix(pool: PgPool) {
    let old_id = common::create_expired_url(&pool, "Mario", "https://old.example.com/").await;
    let server = server(common::create_test_state(pool.clone()));

    let response = server
        .post("/shorten")
        .json(&json!({
            "original_url": common::TEST_URL,
            "custom_suffix": "Mario"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(common::count_by_suffix(&pool, "Mario").await, 1);

    let (id, url, clicks): (i64, String, i64) =
        sqlx::query_as("SELECT id, original_url, clicks FROM web_urls WHERE suffix = 'Mario'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_ne!(id, old_id);
    assert_eq!(url, common::TEST_URL);
    assert_eq!(clicks, 0);
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "not-a-valid-url" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_shorten_trims_surrounding_whitespace(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "  https://example.com/a  " }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["original_url"],
        "https://example.com/a"
    );
}

#[sqlx::test]
async fn test_shorten_non_http_scheme(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "ftp://example.com/file" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test]
async fn test_shorten_missing_original_url(pool: PgPool) {
    let server = server(common::create_test_state(pool));

    let response = server
        .post("/shorten")
        .json(&json!({ "custom_suffix": "Mario" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_shorten_base_url_from_host_header(pool: PgPool) {
    let server = server(common::create_host_derived_state(pool));

    let response = server
        .post("/shorten")
        .add_header("Host", "short.example:8000")
        .json(&json!({
            "original_url": common::TEST_URL,
            "custom_suffix": "Luigi"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "http://short.example:8000/r/Luigi");
}

#[sqlx::test]
async fn test_shorten_missing_host_does_not_create(pool: PgPool) {
    let app = shorten_router(common::create_host_derived_state(pool.clone()));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/shorten")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "original_url": common::TEST_URL, "custom_suffix": "Peach" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::count_by_suffix(&pool, "Peach").await, 0);
}

#[sqlx::test]
async fn test_shorten_http2_uses_uri_authority(pool: PgPool) {
    let app = shorten_router(common::create_host_derived_state(pool.clone()));

    let request = Request::builder()
        .method(Method::POST)
        .uri("http://short.example:8000/shorten")
        .version(Version::HTTP_2)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "original_url": common::TEST_URL, "custom_suffix": "Toad" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["short_url"], "http://short.example:8000/r/Toad");
    assert_eq!(common::count_by_suffix(&pool, "Toad").await, 1);
}
