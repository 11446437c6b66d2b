//! API route configuration.

use crate::api::handlers::{info_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public short link routes.
///
/// # Endpoints
///
/// - `POST /shorten`        - Create a short link
/// - `GET  /r/{suffix}`     - Redirect to the original URL (counts a click)
/// - `GET  /info/{suffix}`  - Link metadata, no side effects
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/r/{suffix}", get(redirect_handler))
        .route("/info/{suffix}", get(info_handler))
}
