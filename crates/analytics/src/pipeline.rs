//! Aggregation pipelines run against the `exercises` collection.
//!
//! Output shapes match [`crate::models::UserStats`] and
//! [`crate::models::ExerciseTotal`] field for field.

use bson::{Document, doc};

use crate::window::StatsWindow;

/// Totals per user and exercise type, optionally restricted to one user.
///
/// Groups on `(username, exerciseType)` summing `duration`, regroups on
/// `username` collecting `{exerciseType, totalDuration}` pairs, then renames
/// `_id` to `username`.
pub fn user_totals(username: Option<&str>) -> Vec<Document> {
    let mut pipeline = Vec::with_capacity(4);

    if let Some(username) = username {
        pipeline.push(doc! { "$match": { "username": username } });
    }

    pipeline.push(doc! {
        "$group": {
            "_id": { "username": "$username", "exerciseType": "$exerciseType" },
            "totalDuration": { "$sum": "$duration" },
        }
    });
    pipeline.push(doc! {
        "$group": {
            "_id": "$_id.username",
            "exercises": {
                "$push": {
                    "exerciseType": "$_id.exerciseType",
                    "totalDuration": "$totalDuration",
                }
            },
        }
    });
    pipeline.push(doc! {
        "$project": { "username": "$_id", "exercises": 1, "_id": 0 }
    });

    pipeline
}

/// Totals per exercise type for one user inside `window`.
pub fn exercise_totals(window: &StatsWindow) -> Vec<Document> {
    vec![
        doc! {
            "$match": {
                "username": window.username.as_str(),
                "date": {
                    "$gte": bson::DateTime::from_chrono(window.start),
                    "$lt": bson::DateTime::from_chrono(window.end),
                },
            }
        },
        doc! {
            "$group": {
                "_id": { "exerciseType": "$exerciseType" },
                "totalDuration": { "$sum": "$duration" },
            }
        },
        doc! {
            "$project": { "exerciseType": "$_id.exerciseType", "totalDuration": 1, "_id": 0 }
        },
    ]
}
