//! Order query handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{OrderFilter, OrderRecord, OrderRepositoryPort};
use crate::application::queries::{GetOrder, ListOrders};
use crate::domain::order::OrderStatus;

/// GetOrder Handler
pub struct GetOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl GetOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, query: GetOrder) -> Result<OrderRecord, ApplicationError> {
        self.order_repo
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Order", query.id))
    }
}

/// ListOrders Handler - newest first.
pub struct ListOrdersHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl ListOrdersHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, query: ListOrders) -> Result<Vec<OrderRecord>, ApplicationError> {
        let status = query
            .status
            .as_deref()
            .map(|raw| {
                OrderStatus::from_str(raw).ok_or_else(|| {
                    ApplicationError::validation(format!("invalid status filter: {}", raw))
                })
            })
            .transpose()?;

        let filter = OrderFilter {
            user_id: query.user_id,
            status,
        };

        Ok(self.order_repo.find_filtered(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NewOrderRecord;
    use crate::infrastructure::memory::InMemoryOrderRepository;
    use rust_decimal::Decimal;
    use serde_json::json;

    async fn seeded_repo() -> Arc<InMemoryOrderRepository> {
        let repo = Arc::new(InMemoryOrderRepository::new());
        for (user, status) in [
            ("u1", OrderStatus::Pending),
            ("u1", OrderStatus::Delivered),
            ("u2", OrderStatus::Pending),
        ] {
            repo.insert(&NewOrderRecord {
                user_id: user.to_string(),
                items: json!([{"name": "x"}]),
                total: Decimal::new(1000, 2),
                status,
            })
            .await
            .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_get_missing_order_is_not_found() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = GetOrderHandler::new(repo);
        let result = handler.handle(GetOrder { id: 123 }).await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_filters_by_user_and_status() {
        let repo = seeded_repo().await;
        let handler = ListOrdersHandler::new(repo);

        let all = handler.handle(ListOrders::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let u1 = handler
            .handle(ListOrders {
                user_id: Some("u1".to_string()),
                status: None,
            })
            .await
            .unwrap();
        assert_eq!(u1.len(), 2);

        let pending_u1 = handler
            .handle(ListOrders {
                user_id: Some("u1".to_string()),
                status: Some("pending".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(pending_u1.len(), 1);
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_status_filter() {
        let repo = seeded_repo().await;
        let handler = ListOrdersHandler::new(repo);
        let result = handler
            .handle(ListOrders {
                user_id: None,
                status: Some("bogus".to_string()),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }
}
