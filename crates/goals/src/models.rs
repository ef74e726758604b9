use bson::{Bson, oid::ObjectId};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::errors::GoalError;

pub const DEFAULT_STATUS: &str = "in-progress";
pub const COMPLETED_STATUS: &str = "completed";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// A goal submitted by a client. Has no id until it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub user_id: String,
    pub goal_type: String,
    pub date: DateTime<Utc>,
    pub status: String,
}

impl NewGoal {
    pub fn new(user_id: String, goal_type: String, date: DateTime<Utc>) -> Self {
        Self {
            user_id,
            goal_type,
            date,
            status: default_status(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Shape of a record in the `goals` collection.
///
/// `date` is kept as raw BSON: goals written by this service hold a BSON
/// datetime, older records may hold an ISO string or no date at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: String,
    pub goal_type: String,
    #[serde(default)]
    pub date: Bson,
    #[serde(default = "default_status")]
    pub status: String,
}

impl GoalDocument {
    /// Assigns a fresh ObjectId.
    pub fn from_new(goal: NewGoal) -> Self {
        Self {
            id: ObjectId::new(),
            user_id: goal.user_id,
            goal_type: goal.goal_type,
            date: Bson::DateTime(bson::DateTime::from_chrono(goal.date)),
            status: goal.status,
        }
    }
}

/// A stored goal as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Goal {
    /// Store-assigned identifier (24 hex characters).
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub goal_type: String,
    /// ISO-8601 timestamp. Omitted for stored goals that have no date.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    #[schema(value_type = Option<String>)]
    pub date: Value,
    pub status: String,
}

impl From<GoalDocument> for Goal {
    fn from(doc: GoalDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            user_id: doc.user_id,
            goal_type: doc.goal_type,
            date: iso_date(doc.date),
            status: doc.status,
        }
    }
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Native datetimes are rendered as ISO-8601. Anything else is passed through
/// as relaxed extended JSON, so strings stay strings and a missing date is null.
fn iso_date(value: Bson) -> Value {
    match value {
        Bson::DateTime(dt) => Value::String(format_date(dt.to_chrono())),
        other => other.into_relaxed_extjson(),
    }
}

/// Parse a client-supplied goal date.
///
/// Accepts RFC 3339 (`2024-12-16T10:00:00Z`, `...+02:00`), a naive
/// date-time (`2024-12-16T10:00:00`, taken as UTC) or a bare date.
pub fn parse_goal_date(raw: &str) -> Result<DateTime<Utc>, GoalError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| GoalError::InvalidDateFormat(raw.to_string()))
}
