use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_update_task_success() {
    let (app, _pool, _guard) = common::test_app().await;

    let created = common::create_test_task(&app, "Before").await;
    let id = created["_id"].as_str().unwrap();

    let body = serde_json::json!({
        "title": "After",
        "description": "Edited",
        "dueDate": "2026-12-01",
    });

    let (status, response) =
        common::put_json(&app, &format!("/api/tasks/{id}"), &body.to_string()).await;

    assert_eq!(status, StatusCode::OK, "got {status}: {response:?}");
    assert_eq!(response["_id"], created["_id"]);
    assert_eq!(response["title"], "After");
    assert_eq!(response["description"], "Edited");
    assert_eq!(response["dueDate"], "2026-12-01");
}

#[tokio::test]
async fn test_update_does_not_touch_completion_flag() {
    let (app, _pool, _guard) = common::test_app().await;

    let created = common::create_test_task(&app, "Toggle then edit").await;
    let id = created["_id"].as_str().unwrap().to_string();

    // Mark completed first
    let (status, _) = common::patch_json(
        &app,
        &format!("/api/tasks/{id}"),
        &serde_json::json!({"isCompleted": true}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // A full update must leave the flag alone
    let body = serde_json::json!({
        "title": "Edited",
        "description": "Still done",
        "dueDate": "2026-12-01",
    });
    let (status, response) =
        common::put_json(&app, &format!("/api/tasks/{id}"), &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["isCompleted"], true);
}

#[tokio::test]
async fn test_update_task_missing_field_is_400() {
    let (app, _pool, _guard) = common::test_app().await;

    let created = common::create_test_task(&app, "Unchanged").await;
    let id = created["_id"].as_str().unwrap();

    let body = serde_json::json!({
        "title": "Only a title",
    });

    let (status, response) =
        common::put_json(&app, &format!("/api/tasks/{id}"), &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "All fields are required");

    // The stored task is unchanged
    let (_, list) = common::get(&app, "/api/tasks").await;
    assert_eq!(list["tasks"][0]["title"], "Unchanged");
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let (app, pool, _guard) = common::test_app().await;

    common::create_test_task(&app, "Bystander").await;

    let unknown = uuid::Uuid::new_v4();
    let body = serde_json::json!({
        "title": "T",
        "description": "D",
        "dueDate": "2026-12-01",
    });

    let (status, response) =
        common::put_json(&app, &format!("/api/tasks/{unknown}"), &body.to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND, "got {status}: {response:?}");
    assert_eq!(response["message"], "Task not found");

    // Store unchanged
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_update_malformed_id_is_404() {
    let (app, _pool, _guard) = common::test_app().await;

    let body = serde_json::json!({
        "title": "T",
        "description": "D",
        "dueDate": "2026-12-01",
    });

    let (status, _response) =
        common::put_json(&app, "/api/tasks/not-a-uuid", &body.to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_bumps_updated_at() {
    let (app, _pool, _guard) = common::test_app().await;

    let created = common::create_test_task(&app, "Timestamps").await;
    let id = created["_id"].as_str().unwrap();

    let body = serde_json::json!({
        "title": "Timestamps",
        "description": "Edited",
        "dueDate": "2026-09-15",
    });
    let (_, response) =
        common::put_json(&app, &format!("/api/tasks/{id}"), &body.to_string()).await;

    assert_eq!(response["createdAt"], created["createdAt"]);
    assert_ne!(response["updatedAt"], created["updatedAt"]);
}
