use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// A to-do task. The sole persisted entity; tasks have no relationships
/// to anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Request/Response DTOs
// ---------------------------------------------------------------------------

/// API response for a task. Field names follow the original wire contract
/// consumed by the browser client (`_id`, camelCase, `dueDate` as a plain
/// `YYYY-MM-DD` string, timestamps as RFC 3339).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TaskResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title,
            description: t.description,
            due_date: t.due_date.format("%Y-%m-%d").to_string(),
            is_completed: t.is_completed,
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
        }
    }
}

/// Response wrapper for the list endpoint: `{"tasks": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
}

/// Request body for creating a task. All three fields are required;
/// absent fields deserialize to empty strings so the handler can reject
/// missing and blank values with the same 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
}

/// Request body for a full update (PUT). Same validation rules as create;
/// the completion flag is deliberately not part of this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
}

/// Request body for the completion toggle (PATCH): `{"isCompleted": bool}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CompleteTaskRequest {
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}
