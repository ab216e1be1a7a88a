use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_complete_task() {
    let (app, _pool, _guard) = common::test_app().await;

    let created = common::create_test_task(&app, "Finish me").await;
    let id = created["_id"].as_str().unwrap();
    assert_eq!(created["isCompleted"], false);

    let (status, response) = common::patch_json(
        &app,
        &format!("/api/tasks/{id}"),
        &serde_json::json!({"isCompleted": true}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "got {status}: {response:?}");
    assert_eq!(response["isCompleted"], true);
    assert_eq!(response["_id"], created["_id"]);
}

#[tokio::test]
async fn test_uncomplete_task() {
    let (app, _pool, _guard) = common::test_app().await;

    let created = common::create_test_task(&app, "Flip twice").await;
    let id = created["_id"].as_str().unwrap().to_string();

    let uri = format!("/api/tasks/{id}");
    common::patch_json(&app, &uri, &serde_json::json!({"isCompleted": true}).to_string()).await;
    let (status, response) =
        common::patch_json(&app, &uri, &serde_json::json!({"isCompleted": false}).to_string())
            .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["isCompleted"], false);
}

#[tokio::test]
async fn test_complete_leaves_other_fields_alone() {
    let (app, _pool, _guard) = common::test_app().await;

    let created = common::create_test_task(&app, "Untouched fields").await;
    let id = created["_id"].as_str().unwrap();

    let (_, response) = common::patch_json(
        &app,
        &format!("/api/tasks/{id}"),
        &serde_json::json!({"isCompleted": true}).to_string(),
    )
    .await;

    assert_eq!(response["title"], created["title"]);
    assert_eq!(response["description"], created["description"]);
    assert_eq!(response["dueDate"], created["dueDate"]);
}

#[tokio::test]
async fn test_complete_unknown_id_is_404() {
    let (app, _pool, _guard) = common::test_app().await;

    let unknown = uuid::Uuid::new_v4();
    let (status, response) = common::patch_json(
        &app,
        &format!("/api/tasks/{unknown}"),
        &serde_json::json!({"isCompleted": true}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND, "got {status}: {response:?}");
    assert_eq!(response["message"], "Task not found");
}
