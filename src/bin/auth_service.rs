//! auth-service - thin wrapper over the external identity provider

use std::sync::Arc;

use comanda::config::{load_config, print_config};
use comanda::infrastructure::adapters::identity::{
    HttpIdentityClient, HttpIdentityClientConfig, IdentityHealthProbe, TokenVerifier,
    TokenVerifierConfig,
};
use comanda::infrastructure::http::{
    auth_routes, shutdown_signal, AuthState, HttpServer, ServerConfig,
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

    tracing::info!("Comanda auth-service");
    print_config(&config);

    // Token verifier with a shared signing key cache
    let verifier_config = TokenVerifierConfig {
        project_id: config.identity.project_id.clone(),
        jwks_url: config.identity.jwks_url.clone(),
        keys_ttl_secs: config.identity.keys_ttl_secs,
        timeout_secs: config.identity.timeout_secs,
    };
    let verifier = Arc::new(
        TokenVerifier::new(verifier_config)
            .map_err(|e| anyhow::anyhow!("Failed to build token verifier: {}", e))?,
    );

    // Identity provider client
    let client_config = HttpIdentityClientConfig {
        base_url: config.identity.base_url.clone(),
        api_key: config.identity.api_key.clone(),
        timeout_secs: config.identity.timeout_secs,
    };
    let identity = Arc::new(
        HttpIdentityClient::new(client_config, verifier.clone())
            .map_err(|e| anyhow::anyhow!("Failed to build identity client: {}", e))?,
    );

    // State
    let health_probe = Arc::new(IdentityHealthProbe::new(verifier));
    let state = Arc::new(AuthState::new(identity, health_probe));

    // HTTP server
    let server_config = ServerConfig::new(&config.auth.host, config.auth.port);
    let server = HttpServer::new(server_config, auth_routes(state));

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
