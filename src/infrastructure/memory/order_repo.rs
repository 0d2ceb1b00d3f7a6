//! In-memory Order Repository

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{
    NewOrderRecord, OrderChanges, OrderFilter, OrderRecord, OrderRepositoryPort, RepositoryError,
};

/// In-memory Order Repository. Ids are assigned sequentially from 1,
/// mirroring AUTO_INCREMENT.
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<i64, OrderRecord>>,
    next_id: AtomicI64,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepositoryPort for InMemoryOrderRepository {
    async fn insert(&self, order: &NewOrderRecord) -> Result<OrderRecord, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();

        let record = OrderRecord {
            id,
            user_id: order.user_id.clone(),
            items: order.items.clone(),
            total: order.total,
            status: order.status,
            created_at: now,
            updated_at: now,
        };

        self.orders.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderRecord>, RepositoryError> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn find_filtered(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<OrderRecord>, RepositoryError> {
        let orders = self.orders.read().await;

        let mut matched: Vec<OrderRecord> = orders
            .values()
            .filter(|order| {
                filter
                    .user_id
                    .as_ref()
                    .map_or(true, |user_id| &order.user_id == user_id)
                    && filter.status.map_or(true, |status| order.status == status)
            })
            .cloned()
            .collect();

        // Newest first, matching the SQL ordering.
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(matched)
    }

    async fn update(
        &self,
        id: i64,
        changes: &OrderChanges,
    ) -> Result<Option<OrderRecord>, RepositoryError> {
        let mut orders = self.orders.write().await;

        let Some(order) = orders.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(status) = changes.status {
            order.status = status;
        }
        if let Some(items) = &changes.items {
            order.items = items.clone();
        }
        if let Some(total) = changes.total {
            order.total = total;
        }
        order.updated_at = Utc::now();

        Ok(Some(order.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.orders.write().await.remove(&id).is_some())
    }
}
