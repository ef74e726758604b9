pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;
pub mod types;

use axum::{
    Extension, Router,
    routing::{get, put},
};
use common::{http::standard_layers, telemetry::spawn_upkeep};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{
        __path_create_goal, __path_get_goals, __path_health_check, __path_update_goal_status,
        create_goal, get_goals, health_check, update_goal_status,
    },
    service::GoalService,
};

pub const SERVICE_NAME: &str = "goals";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Goals API",
        description = "Per-user fitness goals"
    ),
    paths(health_check, get_goals, create_goal, update_goal_status),
    components(schemas(
        models::Goal,
        types::CreateGoalRequest,
        types::UpdateGoalStatusRequest,
        types::GoalsResponse,
        types::CreatedGoalResponse,
        types::HealthResponse,
        types::ErrorResponse,
    )),
    tags(
        (name = "goals", description = "Goal creation and status tracking"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn create_router(service: GoalService) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{goal_id}", put(update_goal_status))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(service));

    standard_layers(router, SERVICE_NAME, env!("CARGO_PKG_VERSION"))
}

pub async fn run_server(service: GoalService, addr: &str) -> anyhow::Result<()> {
    let app = create_router(service);
    spawn_upkeep();

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Goals service listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
