//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                     - Route directory
//! - `GET  /new`                  - Usage hint for the shorten endpoint
//! - `POST /new`                  - Create a mapping (form field `url`)
//! - `GET  /view/api/{short_url}` - One mapping as JSON
//! - `GET  /view/{short_url}`     - One mapping as an HTML page
//! - `GET  /view_all/api`         - Every mapping as JSON
//! - `GET  /{short_url}`          - Redirect to the long URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/view_all/api/`
//!   reaches the same handler as `/view_all/api`

use crate::api::handlers::{
    index_handler, new_url_handler, new_url_usage_handler, redirect_handler,
    view_all_api_handler, view_api_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::view_url_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static path segments win over the `/{short_url}` parameter, so `/new`
/// and the `/view...` routes are never swallowed by the redirect route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/new", get(new_url_usage_handler).post(new_url_handler))
        .route("/view/api/{short_url}", get(view_api_handler))
        .route("/view/{short_url}", get(view_url_handler))
        .route("/view_all/api", get(view_all_api_handler))
        .route("/{short_url}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
