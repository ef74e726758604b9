//! Query and response types used by the REST handlers.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::ExerciseTotal;

/// Weekly stats query. Every field is required; they are optional here so
/// that omissions produce the JSON error envelope.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeeklyStatsQuery {
    /// Username to report on.
    pub user: Option<String>,
    /// First day, `YYYY-MM-DD`.
    pub start: Option<String>,
    /// Last day (inclusive), `YYYY-MM-DD`.
    pub end: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeeklyStatsResponse {
    pub stats: Vec<ExerciseTotal>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
