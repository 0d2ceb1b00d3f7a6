//! Order command handlers

use std::sync::Arc;

use crate::application::commands::{CreateOrder, DeleteOrder, UpdateOrder};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewOrderRecord, OrderChanges, OrderRecord, OrderRepositoryPort};
use crate::domain::order::{OrderItems, OrderStatus, OrderTotal};

fn parse_status(raw: &str) -> Result<OrderStatus, ApplicationError> {
    OrderStatus::from_str(raw).ok_or_else(|| {
        let expected: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        ApplicationError::validation(format!(
            "invalid status: {} (expected one of: {})",
            raw,
            expected.join(", ")
        ))
    })
}

// ============================================================================
// CreateOrder
// ============================================================================

/// CreateOrder Handler - new orders always start as `pending`.
pub struct CreateOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl CreateOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, command: CreateOrder) -> Result<OrderRecord, ApplicationError> {
        if command.user_id.trim().is_empty() {
            return Err(ApplicationError::validation("user_id must not be empty"));
        }
        let items = OrderItems::new(command.items)?;
        let total = OrderTotal::new(command.total)?;

        let order = self
            .order_repo
            .insert(&NewOrderRecord {
                user_id: command.user_id,
                items: items.into_value(),
                total: total.as_decimal(),
                status: OrderStatus::Pending,
            })
            .await?;

        tracing::info!(
            order_id = order.id,
            user_id = %order.user_id,
            total = %order.total,
            "Order created"
        );

        Ok(order)
    }
}

// ============================================================================
// UpdateOrder
// ============================================================================

/// UpdateOrder Handler - partial update of status / items / total.
pub struct UpdateOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl UpdateOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, command: UpdateOrder) -> Result<OrderRecord, ApplicationError> {
        let mut changes = OrderChanges::default();

        if let Some(raw) = &command.status {
            changes.status = Some(parse_status(raw)?);
        }
        if let Some(items) = command.items {
            changes.items = Some(OrderItems::new(items)?.into_value());
        }
        if let Some(total) = command.total {
            changes.total = Some(OrderTotal::new(total)?.as_decimal());
        }

        if changes.is_empty() {
            return Err(ApplicationError::validation(
                "at least one of status, items, total is required",
            ));
        }

        let order = self
            .order_repo
            .update(command.id, &changes)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Order", command.id))?;

        tracing::info!(
            order_id = order.id,
            status = %order.status,
            "Order updated"
        );

        Ok(order)
    }
}

// ============================================================================
// DeleteOrder
// ============================================================================

/// DeleteOrder Handler
pub struct DeleteOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl DeleteOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, command: DeleteOrder) -> Result<(), ApplicationError> {
        let deleted = self.order_repo.delete(command.id).await?;
        if !deleted {
            return Err(ApplicationError::not_found("Order", command.id));
        }

        tracing::info!(order_id = command.id, "Order deleted");
        Ok(())
    }
}
