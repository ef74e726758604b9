//! MongoDB connection bootstrap.

use mongodb::{Client, Database, bson::doc};
use tracing::info;

use crate::config::ServiceConfig;

/// Open the client, select the configured database and ping it once so a bad
/// URI fails at startup instead of on the first request.
pub async fn connect(config: &ServiceConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.mongo_uri).await?;
    let database = client.database(&config.mongo_db);

    database.run_command(doc! { "ping": 1 }).await?;

    info!(database = %config.mongo_db, "Connected to MongoDB");

    Ok(database)
}
