//! Comanda - restaurant ordering backend services
//!
//! One library crate, three deployable services:
//! - auth-service: thin wrapper over an external identity provider
//! - order-service: order CRUD over MySQL
//! - feedback-service: feedback CRUD and rating stats over MongoDB
//!
//! Layers:
//!
//! Domain (domain/):
//! - Order Context: status vocabulary, items/total validation
//! - Feedback Context: rating bounds, comment cap
//! - Auth Context: decoded token claims
//!
//! Application (application/):
//! - Ports: repositories, identity provider, health probe
//! - Commands / Queries: CQRS handlers, one per use case
//!
//! Infrastructure (infrastructure/):
//! - HTTP: axum routers, handlers, health gate middleware
//! - Persistence: MySQL (sqlx) and MongoDB repositories
//! - Adapters: Identity Toolkit REST client, local ID-token verifier
//! - Memory: in-memory repositories for tests

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
