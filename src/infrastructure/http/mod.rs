//! HTTP Layer - RESTful API

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::{auth_routes, feedback_routes, order_routes};
pub use server::{shutdown_signal, HttpServer, ServerConfig};
pub use state::{AuthState, FeedbackState, OrderState, ServiceState};
