//! Health check and raw exercise log handlers.

use axum::{Extension, response::Json};

use crate::{
    errors::StatsError,
    models::ExerciseLogEntry,
    service::StatsService,
    types::{ErrorResponse, HealthResponse},
};

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Every exercise log entry.
#[utoipa::path(
    get,
    path = "/",
    tag = "exercises",
    responses(
        (status = 200, description = "All exercise log entries", body = Vec<ExerciseLogEntry>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_exercises(
    Extension(service): Extension<StatsService>,
) -> Result<Json<Vec<ExerciseLogEntry>>, StatsError> {
    let entries = service.list_entries().await?;
    Ok(Json(entries))
}
