//! Query parameter types for API endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

/// Goal listing query parameters.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GoalsQuery {
    /// Owner of the goals. Required; kept optional here so a missing value
    /// produces the JSON error envelope rather than a query rejection.
    pub user_id: Option<String>,
}
