//! In-process `ExerciseStore` implementations for tests.

#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use analytics::{
    models::{ExerciseDocument, ExerciseTotal, UserStats},
    store::ExerciseStore,
    window::StatsWindow,
};
use async_trait::async_trait;
use axum::{body::Body, http::Response};
use bson::oid::ObjectId;
use chrono::{DateTime, NaiveDate, Utc};
use common::StoreError;
use http_body_util::BodyExt;
use serde_json::Value;

/// Folds the entries in memory the way the aggregation pipelines do.
#[derive(Default)]
pub struct MemoryExerciseStore {
    entries: Vec<ExerciseDocument>,
    calls: AtomicUsize,
}

impl MemoryExerciseStore {
    pub fn new(entries: Vec<ExerciseDocument>) -> Self {
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn totals<'a>(entries: impl Iterator<Item = &'a ExerciseDocument>) -> Vec<ExerciseTotal> {
    let mut by_type: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in entries {
        *by_type.entry(entry.exercise_type.as_str()).or_default() += entry.duration;
    }
    by_type
        .into_iter()
        .map(|(exercise_type, total_duration)| ExerciseTotal {
            exercise_type: Some(exercise_type.to_string()),
            total_duration,
        })
        .collect()
}

#[async_trait]
impl ExerciseStore for MemoryExerciseStore {
    async fn list_entries(&self) -> Result<Vec<ExerciseDocument>, StoreError> {
        self.touch();
        Ok(self.entries.clone())
    }

    async fn user_totals(&self, username: Option<&str>) -> Result<Vec<UserStats>, StoreError> {
        self.touch();
        let mut by_user: BTreeMap<&str, Vec<&ExerciseDocument>> = BTreeMap::new();
        for entry in &self.entries {
            if username.is_none_or(|u| u == entry.username) {
                by_user.entry(entry.username.as_str()).or_default().push(entry);
            }
        }
        Ok(by_user
            .into_iter()
            .map(|(username, entries)| UserStats {
                username: Some(username.to_string()),
                exercises: totals(entries.into_iter()),
            })
            .collect())
    }

    async fn exercise_totals(
        &self,
        window: &StatsWindow,
    ) -> Result<Vec<ExerciseTotal>, StoreError> {
        self.touch();
        Ok(totals(self.entries.iter().filter(|e| {
            e.username == window.username && window.contains(e.date.to_chrono())
        })))
    }
}

pub struct FailingExerciseStore;

fn unavailable() -> StoreError {
    StoreError::Backend("server selection timeout".to_string())
}

#[async_trait]
impl ExerciseStore for FailingExerciseStore {
    async fn list_entries(&self) -> Result<Vec<ExerciseDocument>, StoreError> {
        Err(unavailable())
    }

    async fn user_totals(&self, _username: Option<&str>) -> Result<Vec<UserStats>, StoreError> {
        Err(unavailable())
    }

    async fn exercise_totals(
        &self,
        _window: &StatsWindow,
    ) -> Result<Vec<ExerciseTotal>, StoreError> {
        Err(unavailable())
    }
}

pub fn at(day: &str, hour: u32) -> DateTime<Utc> {
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_utc()
}

pub fn entry(
    username: &str,
    exercise_type: &str,
    duration: f64,
    date: DateTime<Utc>,
) -> ExerciseDocument {
    ExerciseDocument {
        id: ObjectId::new(),
        username: username.to_string(),
        exercise_type: exercise_type.to_string(),
        description: None,
        duration,
        date: bson::DateTime::from_chrono(date),
    }
}

/// alice: run 10 + 5, swim 20; bob: yoga 45.
pub fn sample_entries() -> Vec<ExerciseDocument> {
    vec![
        entry("alice", "run", 10.0, at("2024-01-01", 7)),
        entry("alice", "run", 5.0, at("2024-01-01", 23)),
        entry("alice", "swim", 20.0, at("2024-01-02", 0)),
        entry("bob", "yoga", 45.0, at("2024-01-01", 18)),
    ]
}

/// Order-insensitive view of a user's totals.
pub fn sorted(mut exercises: Vec<ExerciseTotal>) -> Vec<(String, f64)> {
    exercises.sort_by(|a, b| a.exercise_type.cmp(&b.exercise_type));
    exercises
        .into_iter()
        .map(|e| (e.exercise_type.unwrap_or_default(), e.total_duration))
        .collect()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
