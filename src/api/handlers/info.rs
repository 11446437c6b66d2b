//! Handler for record metadata.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::info::InfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a suffix.
///
/// # Endpoint
///
/// `GET /info/{suffix}`
///
/// Expired links are still reported, and the click count is left untouched.
///
/// # Errors
///
/// Returns 404 Not Found if the suffix doesn't exist.
pub async fn info_handler(
    Path(suffix): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InfoResponse>, AppError> {
    let web_url = state.info_service.get_info(&suffix).await?;

    Ok(Json(web_url.into()))
}
