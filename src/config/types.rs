//! Configuration Types
//!
//! One `AppConfig` shared by all three binaries; each service reads its own
//! listen section plus the section for its backing dependency.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// auth-service listen address
    #[serde(default = "default_auth_listen")]
    pub auth: ListenConfig,

    /// order-service listen address
    #[serde(default = "default_orders_listen")]
    pub orders: ListenConfig,

    /// feedback-service listen address
    #[serde(default = "default_feedback_listen")]
    pub feedback: ListenConfig,

    /// MySQL (orders)
    #[serde(default)]
    pub database: DatabaseSettings,

    /// MongoDB (feedback)
    #[serde(default)]
    pub mongodb: MongoSettings,

    /// Identity provider (auth)
    #[serde(default)]
    pub identity: IdentitySettings,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: default_auth_listen(),
            orders: default_orders_listen(),
            feedback: default_feedback_listen(),
            database: DatabaseSettings::default(),
            mongodb: MongoSettings::default(),
            identity: IdentitySettings::default(),
            log: LogConfig::default(),
        }
    }
}

/// Listen address of one service.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ListenConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_auth_listen() -> ListenConfig {
    ListenConfig {
        host: default_host(),
        port: 3001,
    }
}

fn default_orders_listen() -> ListenConfig {
    ListenConfig {
        host: default_host(),
        port: 3002,
    }
}

fn default_feedback_listen() -> ListenConfig {
    ListenConfig {
        host: default_host(),
        port: 3003,
    }
}

/// MySQL settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    #[serde(default = "default_db_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_db_name")]
    pub name: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    3306
}

fn default_db_user() -> String {
    "root".to_string()
}

fn default_db_name() -> String {
    "comanda".to_string()
}

fn default_max_connections() -> u32 {
    10
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: String::new(),
            name: default_db_name(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseSettings {
    /// Connection URL for the pool.
    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// MongoDB settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MongoSettings {
    #[serde(default = "default_mongo_uri")]
    pub uri: String,

    #[serde(default = "default_mongo_database")]
    pub database: String,
}

fn default_mongo_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_mongo_database() -> String {
    "comanda".to_string()
}

impl Default for MongoSettings {
    fn default() -> Self {
        Self {
            uri: default_mongo_uri(),
            database: default_mongo_database(),
        }
    }
}

/// Identity provider settings.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentitySettings {
    /// Identity Toolkit base URL. Point at an emulator in development.
    #[serde(default = "default_identity_base_url")]
    pub base_url: String,

    /// Project API key.
    #[serde(default)]
    pub api_key: String,

    /// Provider project id (token audience and issuer suffix).
    #[serde(default = "default_project_id")]
    pub project_id: String,

    /// JWKS endpoint for ID-token signing keys.
    #[serde(default = "default_jwks_url")]
    pub jwks_url: String,

    /// Provider request timeout in seconds.
    #[serde(default = "default_identity_timeout")]
    pub timeout_secs: u64,

    /// Seconds a fetched signing key set stays fresh.
    #[serde(default = "default_keys_ttl")]
    pub keys_ttl_secs: u64,
}

fn default_identity_base_url() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_project_id() -> String {
    "comanda-demo".to_string()
}

fn default_jwks_url() -> String {
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com"
        .to_string()
}

fn default_identity_timeout() -> u64 {
    10
}

fn default_keys_ttl() -> u64 {
    3600
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            base_url: default_identity_base_url(),
            api_key: String::new(),
            project_id: default_project_id(),
            jwks_url: default_jwks_url(),
            timeout_secs: default_identity_timeout(),
            keys_ttl_secs: default_keys_ttl(),
        }
    }
}

/// Log settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.auth.port, 3001);
        assert_eq!(config.orders.port, 3002);
        assert_eq!(config.feedback.port, 3003);
        assert_eq!(config.database.name, "comanda");
        assert_eq!(config.mongodb.uri, "mongodb://localhost:27017");
    }

    #[test]
    fn test_listen_addr() {
        let config = AppConfig::default();
        assert_eq!(config.orders.addr(), "0.0.0.0:3002");
    }

    #[test]
    fn test_database_url() {
        let config = DatabaseSettings::default();
        assert_eq!(config.database_url(), "mysql://root:@localhost:3306/comanda");
    }
}
