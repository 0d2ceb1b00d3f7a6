//! Feedback Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),

    #[error("comment too long: {chars} chars (max {max})")]
    CommentTooLong { chars: usize, max: usize },
}
