//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::base_url_from_request;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://www.youtube.com/watch?v=R_wscUcbynk",
///   "custom_suffix": "Mario"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8000/r/Mario",
///   "original_url": "https://www.youtube.com/watch?v=R_wscUcbynk",
///   "expires_at": "2025-01-04T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity for a malformed body or URL.
/// Returns 400 Bad Request if the custom suffix is held by a live link,
/// or if no base address is configured and the request names no host.
/// Returns 503 Service Unavailable if no free suffix could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let base_url = match &state.base_url {
        Some(base_url) => base_url.clone(),
        None => base_url_from_request(&headers, &uri, state.behind_proxy)?,
    };

    let web_url = state
        .shorten_service
        .create_short_url(&payload.original_url, payload.custom_suffix)
        .await?;

    tracing::info!(suffix = %web_url.suffix, "Created short URL");

    Ok(Json(ShortenResponse {
        short_url: state.shorten_service.short_url(&base_url, &web_url.suffix),
        original_url: web_url.original_url,
        expires_at: web_url.expires_at,
    }))
}
