use std::sync::Arc;

use analytics::{run_server, service::StatsService, store::MongoExerciseStore};
use common::{
    ServiceConfig, ServiceDefaults,
    config::load_dotenv,
    logging::init_logging,
    mongo,
};

/// `MONGO_DB` has no fallback: the exercise log lives in whatever database
/// the activity-tracking service was pointed at.
const DEFAULTS: ServiceDefaults = ServiceDefaults {
    mongo_db: None,
    port: 5050,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = load_dotenv();
    init_logging();

    if let Some(path) = env_file {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let config = ServiceConfig::from_env(DEFAULTS)?;

    let database = mongo::connect(&config).await?;
    let service = StatsService::new(Arc::new(MongoExerciseStore::new(&database)));

    run_server(service, &config.listen_addr()).await
}
