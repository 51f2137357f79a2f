//! Handler for the route directory.

use axum::Json;
use serde_json::{json, Value};

/// Returns a map of the service's routes.
///
/// # Endpoint
///
/// `GET /`
///
/// A static directory, not generated from the router: paths are written
/// out by hand, with `{short_url}` marking the path parameter.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "new_url": "/new",
        "redirection": "/{short_url}",
        "view_url": "/view/{short_url}",
        "api_url": "/view/api/{short_url}",
        "view_all_urls": "/view_all/api/",
    }))
}
