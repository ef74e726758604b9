use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum GoalError {
    /// Missing or malformed request fields. The message is returned verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid goal ID format: {0}")]
    InvalidIdentifier(String),

    #[error("Goal not found: {0}")]
    NotFound(String),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("{context}: {source}")]
    Persistence {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl GoalError {
    pub fn persistence(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| GoalError::Persistence { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GoalError::Validation(_)
            | GoalError::InvalidIdentifier(_)
            | GoalError::InvalidDateFormat(_) => StatusCode::BAD_REQUEST,
            GoalError::NotFound(_) => StatusCode::NOT_FOUND,
            GoalError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GoalError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            GoalError::Persistence { source, .. } => error!("{self} ({source:?})"),
            GoalError::NotFound(_) => warn!("{self}"),
            _ => {}
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
