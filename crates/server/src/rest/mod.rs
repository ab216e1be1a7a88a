pub mod task;

use axum::{
    routing::{get, put},
    Router,
};

use crate::db::AppState;

/// Build the REST API router for the task endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(task::list_tasks).post(task::create_task))
        .route(
            "/api/tasks/{id}",
            put(task::update_task)
                .patch(task::set_task_completed)
                .delete(task::delete_task),
        )
}
