//! In-process `GoalStore` implementations for tests.

#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{body::Body, http::Response};
use bson::oid::ObjectId;
use common::StoreError;
use goals::{models::GoalDocument, store::GoalStore};
use http_body_util::BodyExt;
use serde_json::Value;

/// Vec-backed store. Counts every call so tests can assert the store was not touched.
#[derive(Default)]
pub struct MemoryGoalStore {
    goals: Mutex<Vec<GoalDocument>>,
    calls: AtomicUsize,
}

impl MemoryGoalStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.goals.lock().unwrap().len()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl GoalStore for MemoryGoalStore {
    async fn insert_goal(&self, goal: &GoalDocument) -> Result<(), StoreError> {
        self.touch();
        self.goals.lock().unwrap().push(goal.clone());
        Ok(())
    }

    async fn find_goals_by_user(&self, user_id: &str) -> Result<Vec<GoalDocument>, StoreError> {
        self.touch();
        Ok(self
            .goals
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn set_goal_status(
        &self,
        id: ObjectId,
        status: &str,
    ) -> Result<Option<GoalDocument>, StoreError> {
        self.touch();
        let mut goals = self.goals.lock().unwrap();
        Ok(goals.iter_mut().find(|g| g.id == id).map(|g| {
            g.status = status.to_string();
            g.clone()
        }))
    }
}

/// Store whose every operation fails.
pub struct FailingGoalStore;

fn unavailable() -> StoreError {
    StoreError::Backend("Database error".to_string())
}

#[async_trait]
impl GoalStore for FailingGoalStore {
    async fn insert_goal(&self, _goal: &GoalDocument) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn find_goals_by_user(&self, _user_id: &str) -> Result<Vec<GoalDocument>, StoreError> {
        Err(unavailable())
    }

    async fn set_goal_status(
        &self,
        _id: ObjectId,
        _status: &str,
    ) -> Result<Option<GoalDocument>, StoreError> {
        Err(unavailable())
    }
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
