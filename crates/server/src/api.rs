use dioxus::prelude::*;
use shared_types::{MessageResponse, TaskResponse};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

// Server functions used by the Dioxus screens. Each performs the same
// validation as the corresponding REST endpoint and delegates to the
// repository; errors travel as AppError JSON inside ServerFnError so the
// client can recover the original message.

/// Create a new task from the create screen.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn create_task(
    title: String,
    description: String,
    due_date: String,
) -> Result<TaskResponse, ServerFnError> {
    let due = crate::rest::task::validate_task_fields(&title, &description, &due_date)
        .map_err(AppErrorExt::into_server_fn_error)?;

    let db = get_db().await;
    let task = crate::repo::task::create(db, title.trim(), description.trim(), due)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    Ok(TaskResponse::from(task))
}

/// Fetch every task. An empty store surfaces the same "No tasks found"
/// condition as the REST endpoint; the list screen renders it as an
/// empty table.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_tasks() -> Result<Vec<TaskResponse>, ServerFnError> {
    use shared_types::AppError;

    let db = get_db().await;
    let tasks = crate::repo::task::list_all(db)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    if tasks.is_empty() {
        return Err(AppError::not_found("No tasks found").into_server_fn_error());
    }

    Ok(tasks.into_iter().map(TaskResponse::from).collect())
}

/// Full update of a task's title, description and due date.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_task(
    id: String,
    title: String,
    description: String,
    due_date: String,
) -> Result<TaskResponse, ServerFnError> {
    use shared_types::AppError;

    let due = crate::rest::task::validate_task_fields(&title, &description, &due_date)
        .map_err(AppErrorExt::into_server_fn_error)?;
    let uuid = crate::rest::task::parse_task_id(&id).map_err(AppErrorExt::into_server_fn_error)?;

    let db = get_db().await;
    let task = crate::repo::task::update(db, uuid, title.trim(), description.trim(), due)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Task not found").into_server_fn_error())?;

    Ok(TaskResponse::from(task))
}

/// Partial update of the completion flag (the list screen's toggle).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_task_completed(
    id: String,
    is_completed: bool,
) -> Result<TaskResponse, ServerFnError> {
    use shared_types::AppError;

    let uuid = crate::rest::task::parse_task_id(&id).map_err(AppErrorExt::into_server_fn_error)?;

    let db = get_db().await;
    let task = crate::repo::task::set_completed(db, uuid, is_completed)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Task not found").into_server_fn_error())?;

    Ok(TaskResponse::from(task))
}

/// Delete a task by id.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_task(id: String) -> Result<MessageResponse, ServerFnError> {
    use shared_types::AppError;

    let uuid = crate::rest::task::parse_task_id(&id).map_err(AppErrorExt::into_server_fn_error)?;

    let db = get_db().await;
    let deleted = crate::repo::task::delete(db, uuid)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    if !deleted {
        return Err(AppError::not_found("Task not found").into_server_fn_error());
    }

    Ok(MessageResponse::new("Task deleted successfully"))
}
