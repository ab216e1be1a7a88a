use chrono::NaiveDate;
use shared_types::{AppError, Task};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Insert a new task with `is_completed = false`. The store assigns the
/// id and both timestamps.
pub async fn create(
    pool: &Pool<Postgres>,
    title: &str,
    description: &str,
    due_date: NaiveDate,
) -> Result<Task, AppError> {
    let row = sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (title, description, due_date)
        VALUES ($1, $2, $3)
        RETURNING id, title, description, due_date, is_completed, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(due_date)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// List every task in storage order (oldest first).
pub async fn list_all(pool: &Pool<Postgres>) -> Result<Vec<Task>, AppError> {
    let rows = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, due_date, is_completed, created_at, updated_at
        FROM tasks
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Replace title, description and due date of a task. Returns the updated
/// record, or None when the id is unknown. Does not touch `is_completed`.
pub async fn update(
    pool: &Pool<Postgres>,
    id: Uuid,
    title: &str,
    description: &str,
    due_date: NaiveDate,
) -> Result<Option<Task>, AppError> {
    let row = sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET title = $2, description = $3, due_date = $4
        WHERE id = $1
        RETURNING id, title, description, due_date, is_completed, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(due_date)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Partial update of the completion flag alone. Returns the updated record
/// or None when the id is unknown.
pub async fn set_completed(
    pool: &Pool<Postgres>,
    id: Uuid,
    is_completed: bool,
) -> Result<Option<Task>, AppError> {
    let row = sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET is_completed = $2
        WHERE id = $1
        RETURNING id, title, description, due_date, is_completed, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(is_completed)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Delete a task. Returns true if a row was actually deleted.
pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
