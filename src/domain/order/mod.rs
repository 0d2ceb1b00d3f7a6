//! Order Context
//!
//! Responsibilities:
//! - Order status enum (the only fixed vocabulary in the order record)
//! - Boundary validation for items and totals
//!
//! Orders carry no lifecycle state machine: any valid status may be set on
//! update, and no referential integrity to users or menu entities is
//! enforced here.

mod errors;
mod status;
mod value_objects;

pub use errors::OrderError;
pub use status::OrderStatus;
pub use value_objects::{OrderItems, OrderTotal};
