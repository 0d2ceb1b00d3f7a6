//! Configuration Loader
//!
//! Multi-source loading and merging, priority high to low:
//! 1. environment variables
//! 2. configuration file (config.toml / config.local.toml)
//! 3. defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Configuration file search names.
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Merged by priority, high to low:
/// 1. environment variables (prefix `COMANDA_`, section separator `__`)
/// 2. configuration file (config.toml or config.local.toml)
/// 3. defaults
///
/// # Environment variable examples
/// - `COMANDA_ORDERS__PORT=4002`
/// - `COMANDA_DATABASE__HOST=mysql.internal`
/// - `COMANDA_DATABASE__PASSWORD=secret`
/// - `COMANDA_MONGODB__URI=mongodb://mongo.internal:27017`
/// - `COMANDA_IDENTITY__API_KEY=AIza...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load from an explicit file path instead of the default search names.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Defaults (lowest priority)
    builder = builder
        .set_default("auth.host", "0.0.0.0")?
        .set_default("auth.port", 3001)?
        .set_default("orders.host", "0.0.0.0")?
        .set_default("orders.port", 3002)?
        .set_default("feedback.host", "0.0.0.0")?
        .set_default("feedback.port", 3003)?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 3306)?
        .set_default("database.user", "root")?
        .set_default("database.password", "")?
        .set_default("database.name", "comanda")?
        .set_default("database.max_connections", 10)?
        .set_default("mongodb.uri", "mongodb://localhost:27017")?
        .set_default("mongodb.database", "comanda")?
        .set_default("identity.base_url", "https://identitytoolkit.googleapis.com/v1")?
        .set_default("identity.api_key", "")?
        .set_default("identity.project_id", "comanda-demo")?
        .set_default(
            "identity.jwks_url",
            "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com",
        )?
        .set_default("identity.timeout_secs", 10)?
        .set_default("identity.keys_ttl_secs", 3600)?
        .set_default("log.level", "info")?;

    // 2. Configuration file, when present
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. Environment variables (highest priority)
    // Prefix: COMANDA_, section separator: __ (double underscore)
    // e.g. COMANDA_DATABASE__HOST=mysql.internal
    builder = builder.add_source(
        Environment::with_prefix("COMANDA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate the merged configuration.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    for (service, listen) in [
        ("auth", &config.auth),
        ("orders", &config.orders),
        ("feedback", &config.feedback),
    ] {
        if listen.port == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{} port cannot be 0",
                service
            )));
        }
    }

    if config.database.host.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database host cannot be empty".to_string(),
        ));
    }

    if config.database.name.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database name cannot be empty".to_string(),
        ));
    }

    if config.mongodb.uri.is_empty() {
        return Err(ConfigError::ValidationError(
            "MongoDB URI cannot be empty".to_string(),
        ));
    }

    if config.identity.project_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "Identity project id cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Dump the effective configuration at startup. Secrets stay out.
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Auth service: {}", config.auth.addr());
    tracing::info!("Order service: {}", config.orders.addr());
    tracing::info!("Feedback service: {}", config.feedback.addr());
    tracing::info!(
        "MySQL: {}@{}:{}/{}",
        config.database.user,
        config.database.host,
        config.database.port,
        config.database.name
    );
    tracing::info!("MySQL Max Connections: {}", config.database.max_connections);
    tracing::info!("MongoDB Database: {}", config.mongodb.database);
    tracing::info!("Identity Base URL: {}", config.identity.base_url);
    tracing::info!("Identity Project: {}", config.identity.project_id);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.orders.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_name() {
        let mut config = AppConfig::default();
        config.database.name = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_mongo_uri() {
        let mut config = AppConfig::default();
        config.mongodb.uri = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[orders]\nport = 4002\n\n[database]\nname = \"comanda_test\"\n",
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.orders.port, 4002);
        assert_eq!(config.database.name, "comanda_test");
        // Untouched sections keep their defaults
        assert_eq!(config.auth.port, 3001);
        assert_eq!(config.mongodb.database, "comanda");
    }
}
