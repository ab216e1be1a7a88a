use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response. `task_store` reflects whether the tasks table
/// is reachable, and `task_count` is populated only when it is.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub task_store: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_count: Option<i64>,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler. Probes the tasks table itself rather than the
/// bare connection, so a missing migration shows up here too.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> Json<HealthResponse> {
    let probe = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await;

    let (store_status, task_count) = match probe {
        Ok(count) => ("reachable".to_string(), Some(count)),
        Err(e) => (format!("error: {e}"), None),
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: if task_count.is_some() { "ok" } else { "degraded" }.to_string(),
        task_store: store_status,
        task_count,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
