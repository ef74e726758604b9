//! Read access to the exercise log.

use async_trait::async_trait;
use common::StoreError;
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::{
    models::{ExerciseDocument, ExerciseTotal, UserStats},
    pipeline,
    window::StatsWindow,
};

pub const EXERCISES_COLLECTION: &str = "exercises";

#[async_trait]
pub trait ExerciseStore: Send + Sync {
    async fn list_entries(&self) -> Result<Vec<ExerciseDocument>, StoreError>;

    /// Duration totals per user and exercise type; `None` covers every user.
    async fn user_totals(&self, username: Option<&str>) -> Result<Vec<UserStats>, StoreError>;

    /// Duration totals per exercise type for the window's user.
    async fn exercise_totals(
        &self,
        window: &StatsWindow,
    ) -> Result<Vec<ExerciseTotal>, StoreError>;
}

#[derive(Clone)]
pub struct MongoExerciseStore {
    collection: Collection<ExerciseDocument>,
}

impl MongoExerciseStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(EXERCISES_COLLECTION),
        }
    }
}

#[async_trait]
impl ExerciseStore for MongoExerciseStore {
    async fn list_entries(&self) -> Result<Vec<ExerciseDocument>, StoreError> {
        let entries = self.collection.find(bson::doc! {}).await?.try_collect().await?;
        Ok(entries)
    }

    async fn user_totals(&self, username: Option<&str>) -> Result<Vec<UserStats>, StoreError> {
        let stats = self
            .collection
            .aggregate(pipeline::user_totals(username))
            .with_type::<UserStats>()
            .await?
            .try_collect()
            .await?;

        Ok(stats)
    }

    async fn exercise_totals(
        &self,
        window: &StatsWindow,
    ) -> Result<Vec<ExerciseTotal>, StoreError> {
        let totals = self
            .collection
            .aggregate(pipeline::exercise_totals(window))
            .with_type::<ExerciseTotal>()
            .await?
            .try_collect()
            .await?;

        Ok(totals)
    }
}
