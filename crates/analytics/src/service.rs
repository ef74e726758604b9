//! Exercise statistics.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    errors::StatsError,
    models::{ExerciseLogEntry, ExerciseTotal, UserStats},
    store::ExerciseStore,
    window::StatsWindow,
};

/// Cheap to clone; all clones share one store handle.
#[derive(Clone)]
pub struct StatsService {
    store: Arc<dyn ExerciseStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn ExerciseStore>) -> Self {
        Self { store }
    }

    pub async fn list_entries(&self) -> Result<Vec<ExerciseLogEntry>, StatsError> {
        let entries = self
            .store
            .list_entries()
            .await
            .map_err(StatsError::persistence("Error fetching exercises"))?;

        Ok(entries.into_iter().map(ExerciseLogEntry::from).collect())
    }

    /// Totals for every user. Result order is whatever the store returns.
    pub async fn all_stats(&self) -> Result<Vec<UserStats>, StatsError> {
        let stats = self
            .store
            .user_totals(None)
            .await
            .map_err(StatsError::persistence("Error fetching stats"))?;

        debug!(users = stats.len(), "Computed stats");
        Ok(stats)
    }

    /// Totals for one user: an empty vec when the user has no entries, otherwise one element.
    pub async fn user_stats(&self, username: &str) -> Result<Vec<UserStats>, StatsError> {
        self.store
            .user_totals(Some(username))
            .await
            .map_err(StatsError::persistence("Error fetching filtered stats"))
    }

    /// Totals per exercise type for `username` between two `YYYY-MM-DD` days,
    /// both inclusive. Dates are checked before the store is queried.
    pub async fn weekly_stats(
        &self,
        username: &str,
        first_day: &str,
        last_day: &str,
    ) -> Result<Vec<ExerciseTotal>, StatsError> {
        let window = StatsWindow::from_days(username, first_day, last_day)?;

        info!(
            username,
            start = %window.start,
            end = %window.end,
            "Fetching weekly stats"
        );

        self.store
            .exercise_totals(&window)
            .await
            .map_err(StatsError::persistence("Error fetching weekly stats"))
    }
}
