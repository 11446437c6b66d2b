mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use web_url_shortener::api::handlers::{health_handler, root_handler};

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_root_message() {
    let app = Router::new().route("/", get(root_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "URL Shortener API"
    );
}
