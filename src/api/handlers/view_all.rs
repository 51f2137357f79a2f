//! Handler for the bulk mapping listing.

use axum::{extract::State, Json};

use crate::api::dto::mapping::MappingResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns every stored mapping as a JSON array.
///
/// # Endpoint
///
/// `GET /view_all/api/`
///
/// The array is unordered and unpaginated; an empty store yields `[]`.
pub async fn view_all_api_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MappingResponse>>, AppError> {
    let mappings = state.mapping_service.list_all().await?;

    Ok(Json(
        mappings.into_iter().map(MappingResponse::from).collect(),
    ))
}
