mod common;

use std::future::IntoFuture;
use std::sync::Arc;

use axum::{Router, routing::post};
use axum_test::TestServer;
use common::MemoryUrlRepository;
use serde_json::{Value, json};
use snip::api::handlers::shorten_handler;

fn test_server(repo: Arc<MemoryUrlRepository>) -> TestServer {
    let state = common::create_test_state(repo);
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_returns_encoded_first_identity() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let server = test_server(repo.clone());

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "www.example.com" }))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["code"], "2bI");
    assert_eq!(body["short_url"], "http://sn.ip/2bI");
    assert_eq!(repo.row_count().await, 1);
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let server = test_server(repo.clone());

    let first: Value = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "www.example.com" }))
        .await
        .json();

    let second: Value = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "www.example.com" }))
        .await
        .json();

    assert_eq!(first["code"], second["code"]);
    assert_eq!(repo.row_count().await, 1);
}

#[tokio::test]
async fn test_shorten_deduplicates_urls_normalizing_identically() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let server = test_server(repo.clone());

    let bare: Value = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "www.example.com" }))
        .await
        .json();

    let prefixed: Value = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "http://www.example.com" }))
        .await
        .json();

    assert_eq!(bare["code"], prefixed["code"]);
    assert_eq!(repo.row_count().await, 1);
}

#[tokio::test]
async fn test_shorten_assigns_distinct_codes_to_distinct_urls() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let server = test_server(repo.clone());

    let first: Value = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json();

    let second: Value = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com/b" }))
        .await
        .json();

    assert_eq!(first["code"], "2bI");
    assert_eq!(second["code"], "2bJ");
    assert_eq!(repo.row_count().await, 2);
}

#[tokio::test]
async fn test_shorten_rejects_empty_url() {
    let server = test_server(Arc::new(MemoryUrlRepository::new()));

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_url_beyond_storage_bound() {
    let server = test_server(Arc::new(MemoryUrlRepository::new()));

    let long_url = format!("https://example.com/{}", "a".repeat(2048));
    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": long_url }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_concurrent_shorten_converges_to_single_record() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let server = test_server(repo.clone());

    let (first, second) = tokio::join!(
        server
            .post("/api/v1/shorten")
            .json(&json!({ "url": "www.example.com" }))
            .into_future(),
        server
            .post("/api/v1/shorten")
            .json(&json!({ "url": "www.example.com" }))
            .into_future(),
    );

    assert_eq!(first.status_code(), 200);
    assert_eq!(second.status_code(), 200);

    let first: Value = first.json();
    let second: Value = second.json();
    assert_eq!(first["code"], second["code"]);
    assert_eq!(repo.row_count().await, 1);
}
