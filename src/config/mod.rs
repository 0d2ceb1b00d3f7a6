//! Configuration Module
//!
//! Layered configuration, highest priority first:
//! - environment variables (COMANDA_ prefix)
//! - configuration file (TOML)
//! - defaults

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{
    AppConfig, DatabaseSettings, IdentitySettings, ListenConfig, LogConfig, MongoSettings,
};
