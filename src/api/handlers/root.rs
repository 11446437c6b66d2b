//! Handler for the service root.

use axum::Json;

use crate::api::dto::health::RootResponse;

/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "URL Shortener API",
    })
}
