//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a suffix to its original URL.
///
/// # Endpoint
///
/// `GET /r/{suffix}`
///
/// Each successful call adds one to the link's click count before the
/// 307 Temporary Redirect is returned, so method and body are preserved.
///
/// # Errors
///
/// Returns 404 Not Found if the suffix doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(suffix): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.redirect_service.resolve(&suffix).await?;

    Ok(Redirect::temporary(&original_url))
}
