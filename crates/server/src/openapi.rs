use axum::Router;
use shared_types::{
    AppError, AppErrorKind, CompleteTaskRequest, CreateTaskRequest, MessageResponse,
    TaskListResponse, TaskResponse, UpdateTaskRequest,
};
use sqlx::{Pool, Postgres};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::{health, rest};

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::task::create_task,
        rest::task::list_tasks,
        rest::task::update_task,
        rest::task::set_task_completed,
        rest::task::delete_task,
        health::health_check,
    ),
    components(schemas(
        TaskResponse,
        TaskListResponse,
        CreateTaskRequest,
        UpdateTaskRequest,
        CompleteTaskRequest,
        MessageResponse,
        AppError,
        AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "tasks", description = "Task creation, listing, update and deletion"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Build the full HTTP surface: REST endpoints, health check and the
/// Scalar API reference at /docs.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
