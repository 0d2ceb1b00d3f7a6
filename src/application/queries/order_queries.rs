//! Order queries

/// Fetch one order by id.
#[derive(Debug, Clone)]
pub struct GetOrder {
    pub id: i64,
}

/// List orders, optionally narrowed by user and/or status. `status` arrives
/// as the raw query-string value and is validated by the handler.
#[derive(Debug, Clone, Default)]
pub struct ListOrders {
    pub user_id: Option<String>,
    pub status: Option<String>,
}
