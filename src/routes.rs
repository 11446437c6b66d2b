//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Service greeting
//! - `GET  /health`         - Health check (database)
//! - `POST /shorten`        - Create a short link
//! - `GET  /r/{suffix}`     - Short link redirect
//! - `GET  /info/{suffix}`  - Short link metadata
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Explicit origin list for browser frontends
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, root_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - origins allowed to call the API from a browser
pub fn app_router(state: AppState, cors_origins: &[String]) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
