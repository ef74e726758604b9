//! GraphQL surface: `stats` and `filteredStats(name)`.
//!
//! Resolvers never raise GraphQL errors for store failures. Failures are
//! logged and reported in the `StatsResult` envelope instead.

use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema, SimpleObject};
use axum::{
    Extension, Json,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tracing::error;

use crate::{errors::StatsError, models::UserStats, service::StatsService};

pub const GRAPHQL_PATH: &str = "/api/graphql";

pub type StatsSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(Debug, SimpleObject)]
pub struct StatsResult {
    pub success: bool,
    pub results: Vec<UserStats>,
    pub errors: Vec<String>,
}

impl StatsResult {
    fn from_outcome(outcome: Result<Vec<UserStats>, StatsError>) -> Self {
        match outcome {
            Ok(results) => Self {
                success: true,
                results,
                errors: Vec::new(),
            },
            Err(err) => {
                error!("{err}");
                Self {
                    success: false,
                    results: Vec::new(),
                    errors: vec![err.to_string()],
                }
            }
        }
    }
}

pub struct QueryRoot {
    service: StatsService,
}

#[Object]
impl QueryRoot {
    /// Duration totals for every user.
    async fn stats(&self) -> StatsResult {
        StatsResult::from_outcome(self.service.all_stats().await)
    }

    /// Duration totals for a single user.
    async fn filtered_stats(&self, name: String) -> StatsResult {
        StatsResult::from_outcome(self.service.user_stats(&name).await)
    }
}

pub fn build_schema(service: StatsService) -> StatsSchema {
    Schema::build(QueryRoot { service }, EmptyMutation, EmptySubscription).finish()
}

/// Execute a query. Responses carrying GraphQL errors (parse, validation) get a 400.
pub async fn graphql_handler(
    Extension(schema): Extension<StatsSchema>,
    Json(request): Json<async_graphql::Request>,
) -> impl IntoResponse {
    let response = schema.execute(request).await;

    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response))
}

/// Interactive explorer.
pub async fn graphiql() -> Html<String> {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .finish(),
    )
}
