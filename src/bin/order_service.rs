//! order-service - order CRUD over MySQL

use std::sync::Arc;

use comanda::config::{load_config, print_config};
use comanda::infrastructure::http::{
    order_routes, shutdown_signal, HttpServer, OrderState, ServerConfig,
};
use comanda::infrastructure::persistence::mysql::{
    create_pool, run_migrations, DatabaseConfig, MySqlHealthProbe, MySqlOrderRepository,
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

    tracing::info!("Comanda order-service");
    print_config(&config);

    // Database
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // State
    let order_repo = Arc::new(MySqlOrderRepository::new(pool.clone()));
    let health_probe = Arc::new(MySqlHealthProbe::new(pool));
    let state = Arc::new(OrderState::new(order_repo, health_probe));

    // HTTP server
    let server_config = ServerConfig::new(&config.orders.host, config.orders.port);
    let server = HttpServer::new(server_config, order_routes(state));

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
