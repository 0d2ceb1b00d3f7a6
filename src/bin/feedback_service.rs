//! feedback-service - feedback CRUD and rating stats over MongoDB

use std::sync::Arc;

use comanda::config::{load_config, print_config};
use comanda::infrastructure::http::{
    feedback_routes, shutdown_signal, FeedbackState, HttpServer, ServerConfig,
};
use comanda::infrastructure::persistence::mongo::{
    connect, MongoConfig, MongoFeedbackRepository, MongoHealthProbe,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    let log_filter = format!(
        "{},comanda={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Comanda feedback-service");
    print_config(&config);

    // Database
    let mongo_config = MongoConfig {
        uri: config.mongodb.uri.clone(),
        database: config.mongodb.database.clone(),
    };
    let database = connect(&mongo_config).await?;

    // State
    let feedback_repo = Arc::new(MongoFeedbackRepository::new(database.clone()));
    let health_probe = Arc::new(MongoHealthProbe::new(database));
    let state = Arc::new(FeedbackState::new(feedback_repo, health_probe));

    // HTTP server
    let server_config = ServerConfig::new(&config.feedback.host, config.feedback.port);
    let server = HttpServer::new(server_config, feedback_routes(state));

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
