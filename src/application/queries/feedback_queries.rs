//! Feedback queries

/// Fetch one feedback entry by id.
#[derive(Debug, Clone)]
pub struct GetFeedback {
    pub id: String,
}

/// List feedback, optionally narrowed by user, order and/or exact rating.
#[derive(Debug, Clone, Default)]
pub struct ListFeedback {
    pub user_id: Option<String>,
    pub order_id: Option<String>,
    pub rating: Option<i64>,
}

/// Aggregate rating statistics over the whole collection.
#[derive(Debug, Clone)]
pub struct GetRatingStats;
