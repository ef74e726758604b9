//! Request body types for API endpoints.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    errors::GoalError,
    models::{COMPLETED_STATUS, NewGoal, parse_goal_date},
};

pub const REQUIRED_FIELDS_MESSAGE: &str = "user_id, goal_type, and date are required";

/// Goal creation request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateGoalRequest {
    pub user_id: Option<String>,
    pub goal_type: Option<String>,
    /// ISO-8601 date or date-time.
    pub date: Option<String>,
    /// Defaults to `in-progress`.
    pub status: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl CreateGoalRequest {
    pub fn into_new_goal(self) -> Result<NewGoal, GoalError> {
        let (Some(user_id), Some(goal_type), Some(date)) = (
            present(self.user_id),
            present(self.goal_type),
            present(self.date),
        ) else {
            return Err(GoalError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        };

        let goal = NewGoal::new(user_id, goal_type, parse_goal_date(&date)?);

        Ok(match present(self.status) {
            Some(status) => goal.with_status(status),
            None => goal,
        })
    }
}

/// Goal status update request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateGoalStatusRequest {
    /// Any value is accepted. Defaults to `completed`.
    pub status: Option<String>,
}

impl UpdateGoalStatusRequest {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(COMPLETED_STATUS)
    }
}
