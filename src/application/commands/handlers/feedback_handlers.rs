//! Feedback command handlers

use std::sync::Arc;

use crate::application::commands::{CreateFeedback, DeleteFeedback};
use crate::application::error::ApplicationError;
use crate::application::ports::{FeedbackRecord, FeedbackRepositoryPort, NewFeedbackRecord};
use crate::domain::feedback::{Comment, Rating};

// ============================================================================
// CreateFeedback
// ============================================================================

/// CreateFeedback Handler - range-checks the rating, caps the comment.
pub struct CreateFeedbackHandler {
    feedback_repo: Arc<dyn FeedbackRepositoryPort>,
}

impl CreateFeedbackHandler {
    pub fn new(feedback_repo: Arc<dyn FeedbackRepositoryPort>) -> Self {
        Self { feedback_repo }
    }

    pub async fn handle(
        &self,
        command: CreateFeedback,
    ) -> Result<FeedbackRecord, ApplicationError> {
        if command.user_id.trim().is_empty() {
            return Err(ApplicationError::validation("user_id must not be empty"));
        }
        let rating = Rating::from_wire(command.rating)?;
        let comment = command
            .comment
            .map(Comment::new)
            .transpose()?
            .map(Comment::into_string);

        let feedback = self
            .feedback_repo
            .insert(&NewFeedbackRecord {
                user_id: command.user_id,
                rating: rating.as_u8(),
                comment,
                order_id: command.order_id,
            })
            .await?;

        tracing::info!(
            feedback_id = %feedback.id,
            user_id = %feedback.user_id,
            rating = feedback.rating,
            "Feedback created"
        );

        Ok(feedback)
    }
}

// ============================================================================
// DeleteFeedback
// ============================================================================

/// DeleteFeedback Handler
pub struct DeleteFeedbackHandler {
    feedback_repo: Arc<dyn FeedbackRepositoryPort>,
}

impl DeleteFeedbackHandler {
    pub fn new(feedback_repo: Arc<dyn FeedbackRepositoryPort>) -> Self {
        Self { feedback_repo }
    }

    pub async fn handle(&self, command: DeleteFeedback) -> Result<(), ApplicationError> {
        let deleted = self.feedback_repo.delete(&command.id).await?;
        if !deleted {
            return Err(ApplicationError::not_found("Feedback", &command.id));
        }

        tracing::info!(feedback_id = %command.id, "Feedback deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryFeedbackRepository;

    #[tokio::test]
    async fn test_create_rejects_out_of_range_rating() {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        let handler = CreateFeedbackHandler::new(repo);

        for rating in [0, 6, -2, 100] {
            let result = handler
                .handle(CreateFeedback {
                    user_id: "u1".to_string(),
                    rating,
                    comment: None,
                    order_id: None,
                })
                .await;
            assert!(
                matches!(result, Err(ApplicationError::ValidationError(_))),
                "rating {} should be rejected",
                rating
            );
        }
    }

    #[tokio::test]
    async fn test_create_persists_optional_fields() {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        let handler = CreateFeedbackHandler::new(repo);

        let feedback = handler
            .handle(CreateFeedback {
                user_id: "u1".to_string(),
                rating: 5,
                comment: Some("ótimo".to_string()),
                order_id: Some("42".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(feedback.rating, 5);
        assert_eq!(feedback.comment.as_deref(), Some("ótimo"));
        assert_eq!(feedback.order_id.as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_delete_missing_feedback_is_not_found() {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        let handler = DeleteFeedbackHandler::new(repo);
        let result = handler
            .handle(DeleteFeedback {
                id: "unknown".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}
