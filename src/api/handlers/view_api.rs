//! Handler for the single-mapping JSON view.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::mapping::{LookupFailure, MappingResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns one mapping as JSON.
///
/// # Endpoint
///
/// `GET /view/api/{short_url}`
///
/// Known codes answer with the mapping:
///
/// ```json
/// {"long_url": "https://example.com", "short_url": "ab3"}
/// ```
///
/// Unknown codes get the same structured "001" payload as the redirect
/// route, again with HTTP 200.
pub async fn view_api_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.mapping_service.resolve(&short_url).await? {
        Some(mapping) => Ok(Json(MappingResponse::from(mapping)).into_response()),
        None => Ok(Json(LookupFailure::invalid_short_url()).into_response()),
    }
}
