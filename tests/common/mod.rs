#![allow(dead_code)]

use minilink::application::services::MappingService;
use minilink::infrastructure::persistence::SqliteMappingRepository;
use minilink::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let mapping_repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));
    let mapping_service = Arc::new(MappingService::new(mapping_repository));

    AppState::new(mapping_service)
}

pub async fn create_test_mapping(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (long, short, date_created) VALUES (?, ?, ?)")
        .bind(url)
        .bind(code)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
