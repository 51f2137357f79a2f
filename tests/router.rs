mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::StatusCode;
use axum_test::TestServer;
use sqlx::SqlitePool;

fn full_app_server(state: minilink::state::AppState) -> TestServer {
    let app = minilink::routes::app_router(state);

    // The normalize-path wrapper is only servable over a real socket.
    TestServer::builder()
        .http_transport()
        .build(ServiceExt::<Request>::into_make_service(app))
        .unwrap()
}

#[sqlx::test]
async fn test_index_lists_route_directory(pool: SqlitePool) {
    let server = full_app_server(common::create_test_state(pool));

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["new_url"], "/new");
    assert_eq!(json["redirection"], "/{short_url}");
    assert_eq!(json["view_url"], "/view/{short_url}");
    assert_eq!(json["api_url"], "/view/api/{short_url}");
    assert_eq!(json["view_all_urls"], "/view_all/api/");
}

#[sqlx::test]
async fn test_trailing_slash_reaches_view_all(pool: SqlitePool) {
    common::create_test_mapping(&pool, "ab3", "https://example.com").await;

    let server = full_app_server(common::create_test_state(pool));

    // Both spellings are served; normalization trims the trailing slash.
    let with_slash = server.get("/view_all/api/").await;
    with_slash.assert_status_ok();
    assert_eq!(with_slash.json::<Vec<serde_json::Value>>().len(), 1);

    let without_slash = server.get("/view_all/api").await;
    without_slash.assert_status_ok();
    assert_eq!(without_slash.json::<Vec<serde_json::Value>>().len(), 1);
}

#[sqlx::test]
async fn test_static_routes_win_over_redirect_param(pool: SqlitePool) {
    let server = full_app_server(common::create_test_state(pool));

    // `/new` must reach the usage handler, not the redirect route with
    // short_url = "new".
    let response = server.get("/new").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json.get("detail").is_some());
    assert!(json.get("status").is_none());
}

#[sqlx::test]
async fn test_shorten_redirect_dedup_scenario(pool: SqlitePool) {
    let server = full_app_server(common::create_test_state(pool));

    let created = server
        .post("/new")
        .form(&[("url", "http://example.com/a")])
        .await;
    created.assert_status_ok();

    let json = created.json::<serde_json::Value>();
    assert_eq!(json["long_url"], "http://example.com/a");
    let code = json["short_url"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 3);

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        redirect.header("location").to_str().unwrap(),
        "http://example.com/a"
    );

    let repeat = server
        .post("/new")
        .form(&[("url", "http://example.com/a")])
        .await;
    repeat.assert_status_ok();

    let json = repeat.json::<serde_json::Value>();
    assert_eq!(json["status"], "002");
    assert_eq!(json["reason"], "URL already exists");
    assert_eq!(json["short_url"], code);
}
