//! Goal handlers.

use axum::{
    Extension,
    body::Bytes,
    extract::{Path, Query, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};

use crate::{
    errors::GoalError,
    models::Goal,
    service::GoalService,
    types::{
        CreateGoalRequest, CreatedGoalResponse, ErrorResponse, GoalsQuery, GoalsResponse,
        UpdateGoalStatusRequest,
    },
};

/// List a user's goals.
#[utoipa::path(
    get,
    path = "/goals",
    tag = "goals",
    params(GoalsQuery),
    responses(
        (status = 200, description = "Goals owned by the user", body = GoalsResponse),
        (status = 400, description = "user_id missing", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_goals(
    Extension(service): Extension<GoalService>,
    Query(query): Query<GoalsQuery>,
) -> Result<Json<GoalsResponse>, GoalError> {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| GoalError::Validation("user_id is required".to_string()))?;

    let goals = service.get_goals_by_user(&user_id).await?;
    Ok(Json(GoalsResponse { goals }))
}

/// Create a goal.
#[utoipa::path(
    post,
    path = "/goals",
    tag = "goals",
    request_body = CreateGoalRequest,
    responses(
        (status = 201, description = "Goal created", body = CreatedGoalResponse),
        (status = 400, description = "Missing fields or bad date", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_goal(
    Extension(service): Extension<GoalService>,
    payload: Result<Json<CreateGoalRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedGoalResponse>), GoalError> {
    let Json(req) = payload.map_err(|rejection| GoalError::Validation(rejection.body_text()))?;

    let goal = service.create_goal(req.into_new_goal()?).await?;
    Ok((StatusCode::CREATED, Json(CreatedGoalResponse { goal })))
}

/// Update a goal's status. The body is optional; status defaults to `completed`.
#[utoipa::path(
    put,
    path = "/goals/{goal_id}",
    tag = "goals",
    params(
        ("goal_id" = String, Path, description = "Goal identifier")
    ),
    request_body = UpdateGoalStatusRequest,
    responses(
        (status = 200, description = "Updated goal", body = Goal),
        (status = 400, description = "Malformed goal id or body", body = ErrorResponse),
        (status = 404, description = "No goal with that id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_goal_status(
    Extension(service): Extension<GoalService>,
    Path(goal_id): Path<String>,
    body: Bytes,
) -> Result<Json<Goal>, GoalError> {
    let req = if body.iter().all(u8::is_ascii_whitespace) {
        UpdateGoalStatusRequest::default()
    } else {
        serde_json::from_slice::<UpdateGoalStatusRequest>(&body)
            .map_err(|e| GoalError::Validation(format!("Invalid request body: {e}")))?
    };

    let goal = service.update_goal_status(&goal_id, req.status()).await?;
    Ok(Json(goal))
}
