//! Order commands

use rust_decimal::Decimal;
use serde_json::Value;

/// Create an order. `status` is not a parameter: new orders are always
/// `pending`.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub user_id: String,
    pub items: Value,
    pub total: Decimal,
}

/// Update an order's mutable fields. `status` arrives as the raw wire
/// string and is parsed against the enum by the handler.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrder {
    pub id: i64,
    pub status: Option<String>,
    pub items: Option<Value>,
    pub total: Option<Decimal>,
}

/// Delete an order.
#[derive(Debug, Clone)]
pub struct DeleteOrder {
    pub id: i64,
}
