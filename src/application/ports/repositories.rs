//! Repository Ports
//!
//! Persistence abstractions for the two record stores. Concrete
//! implementations live in the infrastructure layer (MySQL for orders,
//! MongoDB for feedback, in-memory for tests).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;

use crate::domain::order::OrderStatus;

/// Repository error.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Order Repository
// ============================================================================

/// A persisted order. `id` is assigned by the store (AUTO_INCREMENT).
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub id: i64,
    pub user_id: String,
    /// Opaque JSON array, persisted verbatim.
    pub items: Value,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of an order about to be inserted.
#[derive(Debug, Clone)]
pub struct NewOrderRecord {
    pub user_id: String,
    pub items: Value,
    pub total: Decimal,
    pub status: OrderStatus,
}

/// Partial update for `PUT /orders/:id`. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct OrderChanges {
    pub status: Option<OrderStatus>,
    pub items: Option<Value>,
    pub total: Option<Decimal>,
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.items.is_none() && self.total.is_none()
    }
}

/// Listing filter. `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub user_id: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Order Repository Port.
#[async_trait]
pub trait OrderRepositoryPort: Send + Sync {
    /// Insert a new order, returning the stored record with its assigned id.
    async fn insert(&self, order: &NewOrderRecord) -> Result<OrderRecord, RepositoryError>;

    /// Find one order by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderRecord>, RepositoryError>;

    /// List orders matching the filter, newest first.
    async fn find_filtered(&self, filter: &OrderFilter)
        -> Result<Vec<OrderRecord>, RepositoryError>;

    /// Apply a partial update. Returns the updated record, or `None` if the
    /// order does not exist.
    async fn update(
        &self,
        id: i64,
        changes: &OrderChanges,
    ) -> Result<Option<OrderRecord>, RepositoryError>;

    /// Delete one order. Returns `false` if the order does not exist.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Feedback Repository
// ============================================================================

/// A persisted feedback entry. `id` is assigned by the store (ObjectId),
/// relayed as its hex string.
#[derive(Debug, Clone)]
pub struct FeedbackRecord {
    pub id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: Option<String>,
    /// Unvalidated reference to an order in the other service.
    pub order_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields of a feedback entry about to be inserted.
#[derive(Debug, Clone)]
pub struct NewFeedbackRecord {
    pub user_id: String,
    pub rating: u8,
    pub comment: Option<String>,
    pub order_id: Option<String>,
}

/// Listing filter. `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilter {
    pub user_id: Option<String>,
    pub order_id: Option<String>,
    pub rating: Option<u8>,
}

/// Aggregated rating numbers for the whole collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingStats {
    pub count: u64,
    /// Mean rating, 0.0 when the collection is empty.
    pub average_rating: f64,
    /// Histogram indexed by rating - 1.
    pub ratings: [u64; 5],
}

/// Feedback Repository Port.
#[async_trait]
pub trait FeedbackRepositoryPort: Send + Sync {
    /// Insert a new entry, returning the stored record with its assigned id.
    async fn insert(&self, feedback: &NewFeedbackRecord)
        -> Result<FeedbackRecord, RepositoryError>;

    /// Find one entry by id. A malformed id yields `InvalidId`.
    async fn find_by_id(&self, id: &str) -> Result<Option<FeedbackRecord>, RepositoryError>;

    /// List entries matching the filter, newest first.
    async fn find_filtered(
        &self,
        filter: &FeedbackFilter,
    ) -> Result<Vec<FeedbackRecord>, RepositoryError>;

    /// Delete one entry. Returns `false` if absent; malformed id yields
    /// `InvalidId`.
    async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;

    /// Aggregate count / mean / histogram over the whole collection.
    async fn rating_stats(&self) -> Result<RatingStats, RepositoryError>;
}
