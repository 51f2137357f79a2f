//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tracing::debug;

use crate::api::dto::mapping::LookupFailure;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// Known codes answer with 307 Temporary Redirect and a `Location` header
/// carrying the stored URL verbatim. Unknown codes are not an HTTP error:
/// the response is 200 with the in-body failure payload
///
/// ```json
/// {"status": "001", "reason": "Invalid Short Url"}
/// ```
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.mapping_service.resolve(&short_url).await? {
        Some(mapping) => {
            debug!("Redirecting {} -> {}", short_url, mapping.long_url);
            Ok(Redirect::temporary(&mapping.long_url).into_response())
        }
        None => Ok(Json(LookupFailure::invalid_short_url()).into_response()),
    }
}
