//! Mapping view page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::error::AppError;
use crate::state::AppState;

/// Template for the mapping view page.
///
/// Renders `templates/shorturl.html` with the requested short code and,
/// when the code is known, its long URL.
#[derive(Template, WebTemplate)]
#[template(path = "shorturl.html")]
pub struct ShortUrlTemplate {
    pub short_url: String,
    pub long_url: Option<String>,
}

/// Renders the HTML page for one short code.
///
/// # Endpoint
///
/// `GET /view/{short_url}`
///
/// # Template
///
/// Uses `templates/shorturl.html` for server-side rendering. Unknown codes
/// still render the page with HTTP 200; the long URL slot stays empty.
pub async fn view_url_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<ShortUrlTemplate, AppError> {
    let mapping = state.mapping_service.resolve(&short_url).await?;

    Ok(ShortUrlTemplate {
        short_url,
        long_url: mapping.map(|m| m.long_url),
    })
}
