//! Handlers for the shorten endpoint.

use axum::{extract::State, Form, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::api::dto::new_url::{NewUrlForm, NewUrlResponse};
use crate::application::services::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for the submitted URL.
///
/// # Endpoint
///
/// `POST /new` with an `application/x-www-form-urlencoded` body carrying
/// a single `url` field.
///
/// # Deduplication
///
/// A URL that is already mapped (exact string match) creates no new row;
/// the response reports status "002" with the existing code instead:
///
/// ```json
/// {"status": "002", "reason": "URL already exists", "short_url": "ab3"}
/// ```
///
/// A fresh URL gets a random 3-character code:
///
/// ```json
/// {"long_url": "https://example.com", "short_url": "ab3"}
/// ```
///
/// # Errors
///
/// Returns 409 Conflict if a concurrent request claims the generated code
/// between the free-code check and the insert.
pub async fn new_url_handler(
    State(state): State<AppState>,
    Form(form): Form<NewUrlForm>,
) -> Result<Json<NewUrlResponse>, AppError> {
    let response = match state.mapping_service.shorten(form.url).await? {
        ShortenOutcome::Created(mapping) => {
            info!("Created mapping {} -> {}", mapping.short_code, mapping.long_url);
            NewUrlResponse::created(mapping.long_url, mapping.short_code)
        }
        ShortenOutcome::Existing(mapping) => {
            NewUrlResponse::already_exists(mapping.short_code)
        }
    };

    Ok(Json(response))
}

/// Answers `GET /new`, which carries nothing to shorten.
///
/// Browsers hitting the path by hand get a usage hint instead of a
/// method-not-allowed page.
pub async fn new_url_usage_handler() -> Json<Value> {
    Json(json!({
        "detail": "POST a form with a 'url' field to create a short URL"
    }))
}
