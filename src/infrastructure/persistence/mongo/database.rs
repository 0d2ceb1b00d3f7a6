//! MongoDB Database - client, database handle, health probe

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::application::ports::{HealthProbePort, ProbeError};

/// MongoDB configuration.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string.
    pub uri: String,
    /// Database name.
    pub database: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "comanda".to_string(),
        }
    }
}

/// Connect and return the database handle.
///
/// The driver connects lazily; reachability is only observed by the health
/// probe and by the first real operation.
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.uri).await?;
    let database = client.database(&config.database);

    tracing::info!(database = %config.database, "MongoDB client created");

    Ok(database)
}

/// Liveness probe for the feedback store.
pub struct MongoHealthProbe {
    database: Database,
}

impl MongoHealthProbe {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl HealthProbePort for MongoHealthProbe {
    fn dependency_name(&self) -> &'static str {
        "mongodb"
    }

    async fn probe(&self) -> Result<(), ProbeError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| ProbeError::Unreachable(e.to_string()))
    }
}
