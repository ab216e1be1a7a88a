use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_create_task_success() {
    let (app, _pool, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "title": "Write report",
        "description": "Quarterly summary",
        "dueDate": "2026-09-15",
    });

    let (status, response) = common::post_json(&app, "/api/tasks", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED, "got {status}: {response:?}");
    assert!(response.get("_id").is_some(), "Response should contain an id");
    assert_eq!(response["title"], "Write report");
    assert_eq!(response["description"], "Quarterly summary");
    assert_eq!(response["dueDate"], "2026-09-15");
    assert_eq!(response["isCompleted"], false);
    assert!(response.get("createdAt").is_some());
    assert!(response.get("updatedAt").is_some());
}

#[tokio::test]
async fn test_create_task_round_trip() {
    let (app, _pool, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "title": "T",
        "description": "D",
        "dueDate": "2025-01-01",
    });

    let (status, response) = common::post_json(&app, "/api/tasks", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["title"], "T");
    assert_eq!(response["description"], "D");
    assert_eq!(response["dueDate"], "2025-01-01");
    assert_eq!(response["isCompleted"], false);
}

#[tokio::test]
async fn test_create_task_missing_title() {
    let (app, pool, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "description": "No title here",
        "dueDate": "2026-09-15",
    });

    let (status, response) = common::post_json(&app, "/api/tasks", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "got {status}: {response:?}");
    assert_eq!(response["message"], "All fields are required");

    // Nothing was persisted
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_task_blank_description() {
    let (app, _pool, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "title": "T",
        "description": "   ",
        "dueDate": "2026-09-15",
    });

    let (status, _response) = common::post_json(&app, "/api/tasks", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_task_missing_due_date() {
    let (app, pool, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "title": "T",
        "description": "D",
    });

    let (status, _response) = common::post_json(&app, "/api/tasks", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_task_invalid_due_date() {
    let (app, _pool, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "title": "T",
        "description": "D",
        "dueDate": "someday",
    });

    let (status, response) = common::post_json(&app, "/api/tasks", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "got {status}: {response:?}");
}

#[tokio::test]
async fn test_create_task_multibyte_due_date_is_bad_request() {
    let (app, pool, _guard) = common::test_app().await;

    // 11 bytes with a two-byte final char, so a naive byte cut at 10 would
    // land mid-character. Must come back as a plain 400.
    let body = serde_json::json!({
        "title": "T",
        "description": "D",
        "dueDate": "2025-01-0é",
    });

    let (status, response) = common::post_json(&app, "/api/tasks", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "got {status}: {response:?}");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_create_task_accepts_iso_timestamp_due_date() {
    let (app, _pool, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "title": "T",
        "description": "D",
        "dueDate": "2026-03-01T00:00:00.000Z",
    });

    let (status, response) = common::post_json(&app, "/api/tasks", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["dueDate"], "2026-03-01");
}

#[tokio::test]
async fn test_created_tasks_get_unique_ids() {
    let (app, _pool, _guard) = common::test_app().await;

    let first = common::create_test_task(&app, "First").await;
    let second = common::create_test_task(&app, "Second").await;

    assert_ne!(first["_id"], second["_id"]);
}
