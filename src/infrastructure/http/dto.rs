//! Data Transfer Objects
//!
//! Request bodies keep every field optional: presence is checked in the
//! handlers so a missing field becomes a 400 envelope naming it, not a
//! deserialization failure.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{
    AuthTokens, FeedbackRecord, OrderRecord, RatingStats, UserRecord,
};
use crate::domain::auth::DecodedClaims;
use crate::domain::order::OrderStatus;

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

// ============================================================================
// Order DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: Option<String>,
    pub items: Option<Value>,
    pub total: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub status: Option<String>,
    pub items: Option<Value>,
    pub total: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct ListOrdersParams {
    pub user_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderDto {
    pub id: i64,
    pub user_id: String,
    pub items: Value,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRecord> for OrderDto {
    fn from(order: OrderRecord) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            items: order.items,
            total: order.total,
            status: order.status,
            created_at: rfc3339(order.created_at),
            updated_at: rfc3339(order.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: OrderDto,
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub success: bool,
    pub orders: Vec<OrderDto>,
    pub count: usize,
}

// ============================================================================
// Feedback DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub user_id: Option<String>,
    pub rating: Option<i64>,
    pub comment: Option<String>,
    pub order_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListFeedbackParams {
    pub user_id: Option<String>,
    pub order_id: Option<String>,
    pub rating: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackDto {
    pub id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: Option<String>,
    pub order_id: Option<String>,
    pub created_at: String,
}

impl From<FeedbackRecord> for FeedbackDto {
    fn from(feedback: FeedbackRecord) -> Self {
        Self {
            id: feedback.id,
            user_id: feedback.user_id,
            rating: feedback.rating,
            comment: feedback.comment,
            order_id: feedback.order_id,
            created_at: rfc3339(feedback.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub feedback: FeedbackDto,
}

#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    pub success: bool,
    pub feedbacks: Vec<FeedbackDto>,
    pub count: usize,
}

/// Histogram keys are the rating values as strings ("1" through "5").
#[derive(Debug, Serialize)]
pub struct RatingStatsDto {
    pub count: u64,
    pub average_rating: f64,
    pub ratings: BTreeMap<String, u64>,
}

impl From<RatingStats> for RatingStatsDto {
    fn from(stats: RatingStats) -> Self {
        let ratings = stats
            .ratings
            .iter()
            .enumerate()
            .map(|(index, count)| ((index + 1).to_string(), *count))
            .collect();

        Self {
            count: stats.count,
            average_rating: stats.average_rating,
            ratings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RatingStatsResponse {
    pub success: bool,
    pub stats: RatingStatsDto,
}

// ============================================================================
// Auth DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
    pub created_at: Option<String>,
    pub last_login_at: Option<String>,
}

impl From<UserRecord> for UserDto {
    fn from(user: UserRecord) -> Self {
        Self {
            uid: user.uid,
            email: user.email,
            display_name: user.display_name,
            email_verified: user.email_verified,
            created_at: user.created_at.map(rfc3339),
            last_login_at: user.last_login_at.map(rfc3339),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserDto,
}

/// Login response: the account plus its freshly issued session tokens.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub user: UserDto,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

impl SessionResponse {
    pub fn new(user: UserRecord, tokens: AuthTokens) -> Self {
        Self {
            success: true,
            user: user.into(),
            id_token: tokens.id_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimsResponse {
    pub success: bool,
    pub claims: DecodedClaims,
}

// ============================================================================
// Shared
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_dto_serializes_total_as_decimal_string() {
        let dto = OrderDto {
            id: 1,
            user_id: "u1".to_string(),
            items: serde_json::json!([{"name": "pizza"}]),
            total: Decimal::new(4250, 2),
            status: OrderStatus::Pending,
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            updated_at: "2026-01-01T00:00:00+00:00".to_string(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["total"], "42.50");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn test_rating_stats_histogram_keys() {
        let dto = RatingStatsDto::from(RatingStats {
            count: 3,
            average_rating: 4.0,
            ratings: [0, 0, 1, 0, 2],
        });
        assert_eq!(dto.ratings["3"], 1);
        assert_eq!(dto.ratings["5"], 2);
        assert_eq!(dto.ratings.len(), 5);
    }
}
