mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use minilink::api::handlers::redirect_handler;
use sqlx::SqlitePool;

fn redirect_app(state: minilink::state::AppState) -> Router {
    Router::new()
        .route("/{short_url}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_to_stored_url(pool: SqlitePool) {
    common::create_test_mapping(&pool, "ab3", "https://example.com/landing").await;

    let state = common::create_test_state(pool);
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/ab3").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/landing"
    );
}

#[sqlx::test]
async fn test_redirect_unknown_code_reports_001(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/zzz").await;

    // Not an HTTP error: the failure is carried in the body.
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "001");
    assert_eq!(json["reason"], "Invalid Short Url");
}

#[sqlx::test]
async fn test_redirect_location_preserves_query(pool: SqlitePool) {
    common::create_test_mapping(&pool, "qr7", "https://example.com/search?q=rust&lang=en").await;

    let state = common::create_test_state(pool);
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/qr7").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/search?q=rust&lang=en"
    );
}

#[sqlx::test]
async fn test_redirect_does_not_touch_visits(pool: SqlitePool) {
    common::create_test_mapping(&pool, "vc1", "https://example.com/counted").await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    server.get("/vc1").await;
    server.get("/vc1").await;

    // The schema reserves a hit counter, but redirects leave it alone.
    let visits: i64 = sqlx::query_scalar("SELECT visits FROM urls WHERE short = ?")
        .bind("vc1")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(visits, 0);
}
