//! Persistence seam for goals.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use common::StoreError;
use futures::TryStreamExt;
use mongodb::{Collection, Database, options::ReturnDocument};

use crate::models::GoalDocument;

pub const GOALS_COLLECTION: &str = "goals";

#[async_trait]
pub trait GoalStore: Send + Sync {
    async fn insert_goal(&self, goal: &GoalDocument) -> Result<(), StoreError>;

    async fn find_goals_by_user(&self, user_id: &str) -> Result<Vec<GoalDocument>, StoreError>;

    /// Set `status` on the goal with `id` in a single atomic operation and
    /// return the updated record, or `None` when no goal has that id.
    async fn set_goal_status(
        &self,
        id: ObjectId,
        status: &str,
    ) -> Result<Option<GoalDocument>, StoreError>;
}

#[derive(Clone)]
pub struct MongoGoalStore {
    collection: Collection<GoalDocument>,
}

impl MongoGoalStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(GOALS_COLLECTION),
        }
    }
}

#[async_trait]
impl GoalStore for MongoGoalStore {
    async fn insert_goal(&self, goal: &GoalDocument) -> Result<(), StoreError> {
        self.collection.insert_one(goal).await?;
        Ok(())
    }

    async fn find_goals_by_user(&self, user_id: &str) -> Result<Vec<GoalDocument>, StoreError> {
        let goals = self
            .collection
            .find(doc! { "user_id": user_id })
            .await?
            .try_collect()
            .await?;

        Ok(goals)
    }

    async fn set_goal_status(
        &self,
        id: ObjectId,
        status: &str,
    ) -> Result<Option<GoalDocument>, StoreError> {
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": { "status": status } })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }
}
