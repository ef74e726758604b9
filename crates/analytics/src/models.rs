use async_graphql::SimpleObject;
use bson::oid::ObjectId;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A record in the `exercises` collection. Written by the activity-tracking
/// service; only read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub exercise_type: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration: f64,
    pub date: bson::DateTime,
}

/// Exercise log entry as returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub exercise_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration: f64,
    /// ISO-8601 timestamp.
    pub date: String,
}

impl From<ExerciseDocument> for ExerciseLogEntry {
    fn from(doc: ExerciseDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            username: doc.username,
            exercise_type: doc.exercise_type,
            description: doc.description,
            duration: doc.duration,
            date: doc
                .date
                .to_chrono()
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// Summed duration for one exercise type.
///
/// Log entries written without an `exerciseType` are grouped together and
/// reported with `exercise_type: None` rather than failing the whole query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTotal {
    pub exercise_type: Option<String>,
    pub total_duration: f64,
}

/// Per-user duration totals, one entry per exercise type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct UserStats {
    /// `None` collects entries that carry no username.
    pub username: Option<String>,
    pub exercises: Vec<ExerciseTotal>,
}
