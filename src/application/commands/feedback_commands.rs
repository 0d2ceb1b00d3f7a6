//! Feedback commands

/// Submit feedback. `rating` arrives as the raw wire integer and is range-
/// checked by the handler so out-of-range values report as 400.
#[derive(Debug, Clone)]
pub struct CreateFeedback {
    pub user_id: String,
    pub rating: i64,
    pub comment: Option<String>,
    pub order_id: Option<String>,
}

/// Delete a feedback entry.
#[derive(Debug, Clone)]
pub struct DeleteFeedback {
    pub id: String,
}
