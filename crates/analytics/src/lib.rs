pub mod errors;
pub mod graphql;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod service;
pub mod store;
pub mod types;
pub mod window;

use axum::{Extension, Router, routing::get};
use common::{http::standard_layers, telemetry::spawn_upkeep};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql_handler},
    handlers::{
        __path_get_stats, __path_get_user_stats, __path_get_weekly_stats, __path_health_check,
        __path_list_exercises, get_stats, get_user_stats, get_weekly_stats, health_check,
        list_exercises,
    },
    service::StatsService,
};

pub const SERVICE_NAME: &str = "analytics";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Analytics API",
        description = "Exercise duration statistics. GraphQL is served separately at /api/graphql."
    ),
    paths(health_check, list_exercises, get_stats, get_user_stats, get_weekly_stats),
    components(schemas(
        models::ExerciseLogEntry,
        models::ExerciseTotal,
        models::UserStats,
        types::WeeklyStatsResponse,
        types::HealthResponse,
        types::ErrorResponse,
    )),
    tags(
        (name = "stats", description = "Duration totals"),
        (name = "exercises", description = "Raw exercise log"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn create_router(service: StatsService) -> Router {
    let schema = build_schema(service.clone());

    let router = Router::new()
        .route("/", get(list_exercises))
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        .route("/stats/weekly", get(get_weekly_stats))
        .route("/stats/weekly/", get(get_weekly_stats))
        .route("/stats/{username}", get(get_user_stats))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(service))
        .layer(Extension(schema));

    standard_layers(router, SERVICE_NAME, env!("CARGO_PKG_VERSION"))
}

pub async fn run_server(service: StatsService, addr: &str) -> anyhow::Result<()> {
    let app = create_router(service);
    spawn_upkeep();

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Analytics service listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
