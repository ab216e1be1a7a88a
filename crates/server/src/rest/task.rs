use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    AppError, CompleteTaskRequest, CreateTaskRequest, MessageResponse, TaskListResponse,
    TaskResponse, UpdateTaskRequest,
};

/// Validate the three required fields and parse the due date.
///
/// Missing and blank values are rejected identically; a trailing time
/// portion (as sent by date pickers that produce full ISO timestamps) is
/// tolerated by parsing only the leading `YYYY-MM-DD`.
pub fn validate_task_fields(
    title: &str,
    description: &str,
    due_date: &str,
) -> Result<NaiveDate, AppError> {
    if title.trim().is_empty() || description.trim().is_empty() || due_date.trim().is_empty() {
        return Err(AppError::bad_request("All fields are required"));
    }

    let raw = due_date.trim();
    // `get` rather than indexing: byte 10 of an arbitrary string may not be
    // a char boundary, and a non-date string should fail parsing, not panic.
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("dueDate must be a valid YYYY-MM-DD date"))
}

/// Resolve a path id to a UUID. A malformed id cannot belong to any task,
/// so it maps to the same 404 as an unknown one.
pub fn parse_task_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::not_found("Task not found"))
}

// ---------------------------------------------------------------------------
// POST /api/tasks
// ---------------------------------------------------------------------------

/// Create a new task.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, description = "Missing or invalid field", body = AppError),
        (status = 500, description = "Storage error", body = AppError)
    ),
    tag = "tasks"
)]
#[tracing::instrument(skip(pool))]
pub async fn create_task(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    let due = validate_task_fields(&body.title, &body.description, &body.due_date)?;

    let task = crate::repo::task::create(&pool, body.title.trim(), body.description.trim(), due)
        .await
        .inspect_err(|e| tracing::error!("task creation failed: {e}"))?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

// ---------------------------------------------------------------------------
// GET /api/tasks
// ---------------------------------------------------------------------------

/// List every task.
///
/// An empty store answers 404, not an empty list. Unusual for REST, but
/// the browser client depends on this wire shape.
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "All tasks", body = TaskListResponse),
        (status = 404, description = "No tasks exist", body = AppError),
        (status = 500, description = "Storage error", body = AppError)
    ),
    tag = "tasks"
)]
#[tracing::instrument(skip(pool))]
pub async fn list_tasks(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<TaskListResponse>, AppError> {
    let tasks = crate::repo::task::list_all(&pool)
        .await
        .inspect_err(|e| tracing::error!("task listing failed: {e}"))?;

    if tasks.is_empty() {
        return Err(AppError::not_found("No tasks found"));
    }

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskResponse::from).collect(),
    }))
}

// ---------------------------------------------------------------------------
// PUT /api/tasks/{id}
// ---------------------------------------------------------------------------

/// Full update of title, description and due date. Leaves the completion
/// flag untouched.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task UUID")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, description = "Missing or invalid field", body = AppError),
        (status = 404, description = "Not found", body = AppError),
        (status = 500, description = "Storage error", body = AppError)
    ),
    tag = "tasks"
)]
#[tracing::instrument(skip(pool))]
pub async fn update_task(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    let due = validate_task_fields(&body.title, &body.description, &body.due_date)?;
    let uuid = parse_task_id(&id)?;

    let task =
        crate::repo::task::update(&pool, uuid, body.title.trim(), body.description.trim(), due)
            .await
            .inspect_err(|e| tracing::error!("task update failed: {e}"))?
            .ok_or_else(|| AppError::not_found("Task not found"))?;

    Ok(Json(TaskResponse::from(task)))
}

// ---------------------------------------------------------------------------
// PATCH /api/tasks/{id}
// ---------------------------------------------------------------------------

/// Partial update of the completion flag alone.
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task UUID")),
    request_body = CompleteTaskRequest,
    responses(
        (status = 200, description = "Completion flag updated", body = TaskResponse),
        (status = 404, description = "Not found", body = AppError),
        (status = 500, description = "Storage error", body = AppError)
    ),
    tag = "tasks"
)]
#[tracing::instrument(skip(pool))]
pub async fn set_task_completed(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
    Json(body): Json<CompleteTaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    let uuid = parse_task_id(&id)?;

    let task = crate::repo::task::set_completed(&pool, uuid, body.is_completed)
        .await
        .inspect_err(|e| tracing::error!("completion update failed: {e}"))?
        .ok_or_else(|| AppError::not_found("Task not found"))?;

    Ok(Json(TaskResponse::from(task)))
}

// ---------------------------------------------------------------------------
// DELETE /api/tasks/{id}
// ---------------------------------------------------------------------------

/// Delete a task.
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = String, Path, description = "Task UUID")),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = AppError),
        (status = 500, description = "Storage error", body = AppError)
    ),
    tag = "tasks"
)]
#[tracing::instrument(skip(pool))]
pub async fn delete_task(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let uuid = parse_task_id(&id)?;

    let deleted = crate::repo::task::delete(&pool, uuid)
        .await
        .inspect_err(|e| tracing::error!("task deletion failed: {e}"))?;

    if deleted {
        Ok(Json(MessageResponse::new("Task deleted successfully")))
    } else {
        Err(AppError::not_found("Task not found"))
    }
}
