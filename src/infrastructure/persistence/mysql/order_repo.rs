//! MySQL Order Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    NewOrderRecord, OrderChanges, OrderFilter, OrderRecord, OrderRepositoryPort, RepositoryError,
};
use crate::domain::order::OrderStatus;

const SELECT_COLUMNS: &str = "id, user_id, items, total, status, created_at, updated_at";

/// MySQL Order Repository.
pub struct MySqlOrderRepository {
    pool: DbPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OrderRow {
    id: i64,
    user_id: String,
    items: Json<serde_json::Value>,
    total: Decimal,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for OrderRecord {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = OrderStatus::from_str(&row.status).ok_or_else(|| {
            RepositoryError::SerializationError(format!("unknown status in store: {}", row.status))
        })?;

        Ok(OrderRecord {
            id: row.id,
            user_id: row.user_id,
            items: row.items.0,
            total: row.total,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl OrderRepositoryPort for MySqlOrderRepository {
    async fn insert(&self, order: &NewOrderRecord) -> Result<OrderRecord, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO orders (user_id, items, total, status) VALUES (?, ?, ?, ?)",
        )
        .bind(&order.user_id)
        .bind(Json(&order.items))
        .bind(order.total)
        .bind(order.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let id = result.last_insert_id() as i64;

        // Re-read so the store-assigned timestamps come back with the record.
        self.find_by_id(id).await?.ok_or_else(|| {
            RepositoryError::DatabaseError(format!("inserted order {} not readable", id))
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderRecord>, RepositoryError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "SELECT {} FROM orders WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(OrderRecord::try_from).transpose()
    }

    async fn find_filtered(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<OrderRecord>, RepositoryError> {
        let mut sql = format!("SELECT {} FROM orders", SELECT_COLUMNS);

        let mut conditions: Vec<&str> = Vec::new();
        if filter.user_id.is_some() {
            conditions.push("user_id = ?");
        }
        if filter.status.is_some() {
            conditions.push("status = ?");
        }
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");

        let mut query = sqlx::query_as::<_, OrderRow>(&sql);
        if let Some(user_id) = &filter.user_id {
            query = query.bind(user_id);
        }
        if let Some(status) = filter.status {
            query = query.bind(status.as_str());
        }

        let rows: Vec<OrderRow> = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(OrderRecord::try_from).collect()
    }

    async fn update(
        &self,
        id: i64,
        changes: &OrderChanges,
    ) -> Result<Option<OrderRecord>, RepositoryError> {
        // Existence check first: an UPDATE that changes nothing reports zero
        // affected rows, which is indistinguishable from a missing id.
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut assignments: Vec<&str> = Vec::new();
        if changes.status.is_some() {
            assignments.push("status = ?");
        }
        if changes.items.is_some() {
            assignments.push("items = ?");
        }
        if changes.total.is_some() {
            assignments.push("total = ?");
        }

        if !assignments.is_empty() {
            let sql = format!("UPDATE orders SET {} WHERE id = ?", assignments.join(", "));

            let mut query = sqlx::query(&sql);
            if let Some(status) = changes.status {
                query = query.bind(status.as_str());
            }
            if let Some(items) = &changes.items {
                query = query.bind(Json(items));
            }
            if let Some(total) = changes.total {
                query = query.bind(total);
            }

            query
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
