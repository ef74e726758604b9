//! Goal lifecycle: create, list per user, update status.

use std::sync::Arc;

use bson::oid::ObjectId;
use tracing::{debug, info};

use crate::{
    errors::GoalError,
    models::{Goal, GoalDocument, NewGoal},
    store::GoalStore,
};

/// Cheap to clone; all clones share one store handle.
#[derive(Clone)]
pub struct GoalService {
    store: Arc<dyn GoalStore>,
}

impl GoalService {
    pub fn new(store: Arc<dyn GoalStore>) -> Self {
        Self { store }
    }

    pub async fn create_goal(&self, goal: NewGoal) -> Result<Goal, GoalError> {
        let document = GoalDocument::from_new(goal);

        self.store
            .insert_goal(&document)
            .await
            .map_err(GoalError::persistence("Error creating goal"))?;

        info!(goal_id = %document.id, user_id = %document.user_id, "Goal created");

        Ok(document.into())
    }

    /// The id is validated before the store is consulted.
    pub async fn update_goal_status(&self, goal_id: &str, status: &str) -> Result<Goal, GoalError> {
        let id = ObjectId::parse_str(goal_id)
            .map_err(|_| GoalError::InvalidIdentifier(goal_id.to_string()))?;

        let updated = self
            .store
            .set_goal_status(id, status)
            .await
            .map_err(GoalError::persistence("Error updating goal status"))?
            .ok_or_else(|| GoalError::NotFound(goal_id.to_string()))?;

        info!(goal_id = %id, status, "Goal status updated");

        Ok(updated.into())
    }

    /// An unknown user simply has no goals.
    pub async fn get_goals_by_user(&self, user_id: &str) -> Result<Vec<Goal>, GoalError> {
        let documents = self
            .store
            .find_goals_by_user(user_id)
            .await
            .map_err(GoalError::persistence("Error fetching goals"))?;

        debug!(user_id, count = documents.len(), "Fetched goals");

        Ok(documents.into_iter().map(Goal::from).collect())
    }
}
