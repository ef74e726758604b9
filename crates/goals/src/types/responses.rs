//! Response types for API endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Goal;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GoalsResponse {
    pub goals: Vec<Goal>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedGoalResponse {
    pub goal: Goal,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
