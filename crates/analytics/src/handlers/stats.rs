//! Duration statistics handlers.

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};

use crate::{
    errors::StatsError,
    models::UserStats,
    service::StatsService,
    types::{ErrorResponse, WeeklyStatsQuery, WeeklyStatsResponse},
};

/// Duration totals per user and exercise type.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Totals for every user", body = Vec<UserStats>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_stats(
    Extension(service): Extension<StatsService>,
) -> Result<Json<Vec<UserStats>>, StatsError> {
    let stats = service.all_stats().await?;
    Ok(Json(stats))
}

/// Duration totals for one user.
#[utoipa::path(
    get,
    path = "/stats/{username}",
    tag = "stats",
    params(
        ("username" = String, Path, description = "Username to report on")
    ),
    responses(
        (status = 200, description = "Zero or one entry", body = Vec<UserStats>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_user_stats(
    Extension(service): Extension<StatsService>,
    Path(username): Path<String>,
) -> Result<Json<Vec<UserStats>>, StatsError> {
    let stats = service.user_stats(&username).await?;
    Ok(Json(stats))
}

/// Duration totals per exercise type for one user over a date range.
#[utoipa::path(
    get,
    path = "/stats/weekly/",
    tag = "stats",
    params(WeeklyStatsQuery),
    responses(
        (status = 200, description = "Totals per exercise type", body = WeeklyStatsResponse),
        (status = 400, description = "Missing user or bad date", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_weekly_stats(
    Extension(service): Extension<StatsService>,
    Query(query): Query<WeeklyStatsQuery>,
) -> Result<Json<WeeklyStatsResponse>, StatsError> {
    let user = query
        .user
        .filter(|u| !u.is_empty())
        .ok_or_else(|| StatsError::Validation("user is required".to_string()))?;

    let stats = service
        .weekly_stats(
            &user,
            query.start.as_deref().unwrap_or_default(),
            query.end.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(WeeklyStatsResponse { stats }))
}
