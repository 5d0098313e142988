mod common;

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::MemoryUrlRepository;
use snip::api::handlers::redirect_handler;
use snip::state::AppState;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let state = common::create_test_state(repo);
    let server = test_server(state.clone());

    let code = state
        .shortener_service
        .shorten("https://example.com/target")
        .await
        .unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_round_trip_returns_normalized_url() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let state = common::create_test_state(repo);
    let server = test_server(state.clone());

    let code = state
        .shortener_service
        .shorten("www.example.com")
        .await
        .unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "http://www.example.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let state = common::create_test_state(Arc::new(MemoryUrlRepository::new()));
    let server = test_server(state);

    let response = server.get("/doesNotExist").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_serves_repeat_lookups_from_cache() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let state = common::create_test_state(repo.clone());
    let server = test_server(state.clone());

    let code = state
        .shortener_service
        .shorten("https://example.com/cached")
        .await
        .unwrap();

    let first = server.get(&format!("/{code}")).await;
    let second = server.get(&format!("/{code}")).await;

    assert_eq!(first.status_code(), 307);
    assert_eq!(second.status_code(), 307);
    assert_eq!(first.header("location"), second.header("location"));

    // Only the first redirect may reach the store.
    assert_eq!(repo.short_code_lookups(), 1);
}

#[tokio::test]
async fn test_redirect_not_found_leaves_cache_empty() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let state = common::create_test_state(repo.clone());
    let server = test_server(state.clone());

    server.get("/doesNotExist").await.assert_status_not_found();
    server.get("/doesNotExist").await.assert_status_not_found();

    // Without a cache entry, both misses reach the store.
    assert_eq!(repo.short_code_lookups(), 2);
    assert_eq!(state.cache.get_url("doesNotExist").await.unwrap(), None);
}
