//! MySQL persistence for the order service

mod database;
mod order_repo;

pub use database::{create_pool, run_migrations, DatabaseConfig, DbPool, MySqlHealthProbe};
pub use order_repo::MySqlOrderRepository;
