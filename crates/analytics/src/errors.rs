use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),

    #[error("{context}: {source}")]
    Persistence {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl StatsError {
    pub fn persistence(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| StatsError::Persistence { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            StatsError::Validation(_) | StatsError::InvalidDateFormat(_) => {
                StatusCode::BAD_REQUEST
            }
            StatsError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message put in the response body. Store failures are not described to clients.
    pub fn public_message(&self) -> String {
        match self {
            StatsError::Validation(msg) => msg.clone(),
            StatsError::InvalidDateFormat(_) => "Invalid date format".to_string(),
            StatsError::Persistence { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        match &self {
            StatsError::Persistence { source, .. } => error!("{self} ({source:?})"),
            StatsError::InvalidDateFormat(_) => warn!("{self}"),
            StatsError::Validation(_) => {}
        }

        let body = Json(json!({
            "error": self.public_message(),
        }));

        (self.status_code(), body).into_response()
    }
}
