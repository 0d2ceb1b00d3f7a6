//! Query handler implementations

mod auth_handlers;
mod feedback_handlers;
mod order_handlers;

pub use auth_handlers::*;
pub use feedback_handlers::*;
pub use order_handlers::*;
