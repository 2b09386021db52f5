//! API integration tests, driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shelf_server::{api, config::AppConfig, models::Library, AppState};

const BASE_URL: &str = "/api/v1";

fn app() -> Router {
    api::create_router(AppState::new(AppConfig::default(), Library::new()))
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE_URL, path));
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"))
}

async fn send_json(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, text) = send(app, method, path, body).await;
    let value = serde_json::from_str(&text).expect("Failed to parse response");
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 0);
    assert_eq!(body["persistence"], false);
    assert_eq!(body["autosave"], false);
}

#[tokio::test]
async fn test_health_reports_storage_settings() {
    let mut config = AppConfig::default();
    config.storage.snapshot_path = Some(
        std::env::temp_dir()
            .join(format!("shelf-health-{}", std::process::id()))
            .join("library.json")
            .display()
            .to_string(),
    );
    config.storage.autosave = true;
    let app = api::create_router(AppState::new(config, Library::new()));

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["persistence"], true);
    assert_eq!(body["autosave"], true);
}

#[tokio::test]
async fn test_create_and_list_book() {
    let app = app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "1984", "author": "George Orwell", "quantity": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 0);
    assert_eq!(body["quantity_available"], 3);

    let (status, body) = send_json(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "1984");

    let (status, body) = send_json(&app, Method::GET, "/books/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], "George Orwell");
}

#[tokio::test]
async fn test_create_book_validation() {
    let app = app();

    for payload in [
        json!({ "title": "  ", "author": "George Orwell", "quantity": 3 }),
        json!({ "title": "1984", "author": "", "quantity": 3 }),
        json!({ "title": "1984", "author": "George Orwell", "quantity": 0 }),
        json!({ "title": "1984", "author": "George Orwell", "quantity": "three" }),
        json!({ "title": "1984" }),
    ] {
        let (status, body) = send_json(&app, Method::POST, "/books", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadValue");
    }

    let (_, text) = send(&app, Method::GET, "/books/report", None).await;
    assert_eq!(text, "No books available!");
}

#[tokio::test]
async fn test_create_user_and_duplicate() {
    let app = app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Alice", "id": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Alicia", "id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");

    let (_, body) = send_json(&app, Method::GET, "/users", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = send_json(&app, Method::GET, "/users/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found!");
}

#[tokio::test]
async fn test_issue_and_return_scenario() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "1984", "author": "Orwell", "quantity": 1 })),
    )
    .await;
    send(&app, Method::POST, "/users", Some(json!({ "name": "Alice", "id": 1 }))).await;

    let loan = json!({ "title": "1984", "user_id": 1 });

    let (status, body) = send_json(&app, Method::POST, "/loans", Some(loan.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Book issued successfully to Alice!");
    assert_eq!(body["loan"]["quantity_available"], 0);

    let (status, body) = send_json(&app, Method::POST, "/loans", Some(loan.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "ItemNotAvailable");

    let (_, body) = send_json(&app, Method::GET, "/users/1/loans", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (_, text) = send(&app, Method::GET, "/users/report", None).await;
    assert_eq!(text, "Alice (ID: 1)\nIssued Books:\n  - 1984\n\n");

    let (status, body) = send_json(&app, Method::POST, "/loans/return", Some(loan.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book returned successfully!");
    assert_eq!(body["loan"]["quantity_available"], 1);

    let (status, body) = send_json(&app, Method::POST, "/loans/return", Some(loan)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "This book was not issued to the user.");

    let (_, body) = send_json(&app, Method::GET, "/users/1", None).await;
    assert_eq!(body["issued_books"].as_array().map(Vec::len), Some(0));

    let (_, text) = send(&app, Method::GET, "/books/report", None).await;
    assert_eq!(text, "1984 by Orwell (1 available)\n");
}

#[tokio::test]
async fn test_issue_unknown_user() {
    let app = app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "title": "1984", "user_id": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchUser");
}

#[tokio::test]
async fn test_return_unknown_user() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "1984", "author": "Orwell", "quantity": 1 })),
    )
    .await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans/return",
        Some(json!({ "title": "1984", "user_id": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchUser");

    let (_, text) = send(&app, Method::GET, "/books/report", None).await;
    assert_eq!(text, "1984 by Orwell (1 available)\n");
}

#[tokio::test]
async fn test_issue_title_missing_from_catalog() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "1984", "author": "Orwell", "quantity": 1 })),
    )
    .await;
    send(&app, Method::POST, "/users", Some(json!({ "name": "Alice", "id": 1 }))).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "title": "Dune", "user_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "ItemNotAvailable");
    assert_eq!(body["message"], "Book not available!");

    let (_, body) = send_json(&app, Method::GET, "/users/1", None).await;
    assert_eq!(body["issued_books"].as_array().map(Vec::len), Some(0));
    let (_, text) = send(&app, Method::GET, "/books/report", None).await;
    assert_eq!(text, "1984 by Orwell (1 available)\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_changes_with_autosave() {
    let dir = std::env::temp_dir().join(format!("shelf-api-race-{}", std::process::id()));
    let path = dir.join("library.json");
    let mut config = AppConfig::default();
    config.storage.snapshot_path = Some(path.display().to_string());
    config.storage.autosave = true;
    let app = api::create_router(AppState::new(config, Library::new()));

    let mut handles = Vec::new();
    for n in 0..24 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let (status, _) = send(
                &app,
                Method::POST,
                "/books",
                Some(json!({ "title": format!("Volume {}", n), "author": "Anonymous", "quantity": 1 })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }));
    }
    for handle in handles {
        handle.await.expect("Task panicked");
    }

    let bytes = std::fs::read(&path).expect("Snapshot not written");
    let on_disk: Value = serde_json::from_slice(&bytes).expect("Snapshot is not JSON");
    let (_, live) = send_json(&app, Method::GET, "/books", None).await;
    assert_eq!(on_disk["books"].as_array().map(Vec::len), Some(24));
    assert_eq!(live.as_array().map(Vec::len), Some(24));

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_snapshot_without_path_is_rejected() {
    let app = app();
    let (status, body) = send_json(&app, Method::POST, "/snapshot/save", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No snapshot path configured");
}

#[tokio::test]
async fn test_snapshot_save_and_load() {
    let dir = std::env::temp_dir().join(format!("shelf-api-{}", std::process::id()));
    let mut config = AppConfig::default();
    config.storage.snapshot_path = Some(dir.join("library.json").display().to_string());
    let app = api::create_router(AppState::new(config, Library::new()));

    send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "Emma", "author": "Jane Austen", "quantity": 2 })),
    )
    .await;
    let (status, body) = send_json(&app, Method::POST, "/snapshot/save", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], 1);
    assert_eq!(body["books"], 1);

    send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "title": "Dune", "author": "Frank Herbert", "quantity": 1 })),
    )
    .await;
    let (status, _) = send_json(&app, Method::POST, "/snapshot/load", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send_json(&app, Method::GET, "/books", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "Emma");

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app.oneshot(request).await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body");
    let body: Value = serde_json::from_slice(&bytes).expect("Failed to parse response");
    assert!(body["paths"]["/loans"].is_object());
}
