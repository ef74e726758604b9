use std::sync::Arc;

use common::{
    ServiceConfig, ServiceDefaults,
    config::load_dotenv,
    logging::init_logging,
    mongo,
};
use goals::{run_server, service::GoalService, store::MongoGoalStore};

const DEFAULTS: ServiceDefaults = ServiceDefaults {
    mongo_db: Some("goals"),
    port: 5020,
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
    let service = GoalService::new(Arc::new(MongoGoalStore::new(&database)));

    run_server(service, &config.listen_addr()).await
}
