//! Feedback query handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    FeedbackFilter, FeedbackRecord, FeedbackRepositoryPort, RatingStats,
};
use crate::application::queries::{GetFeedback, GetRatingStats, ListFeedback};
use crate::domain::feedback::Rating;

/// GetFeedback Handler
pub struct GetFeedbackHandler {
    feedback_repo: Arc<dyn FeedbackRepositoryPort>,
}

impl GetFeedbackHandler {
    pub fn new(feedback_repo: Arc<dyn FeedbackRepositoryPort>) -> Self {
        Self { feedback_repo }
    }

    pub async fn handle(&self, query: GetFeedback) -> Result<FeedbackRecord, ApplicationError> {
        self.feedback_repo
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Feedback", &query.id))
    }
}

/// ListFeedback Handler - newest first.
pub struct ListFeedbackHandler {
    feedback_repo: Arc<dyn FeedbackRepositoryPort>,
}

impl ListFeedbackHandler {
    pub fn new(feedback_repo: Arc<dyn FeedbackRepositoryPort>) -> Self {
        Self { feedback_repo }
    }

    pub async fn handle(
        &self,
        query: ListFeedback,
    ) -> Result<Vec<FeedbackRecord>, ApplicationError> {
        let rating = query
            .rating
            .map(|raw| Rating::from_wire(raw).map(|r| r.as_u8()))
            .transpose()?;

        let filter = FeedbackFilter {
            user_id: query.user_id,
            order_id: query.order_id,
            rating,
        };

        Ok(self.feedback_repo.find_filtered(&filter).await?)
    }
}

/// RatingStats Handler
pub struct RatingStatsHandler {
    feedback_repo: Arc<dyn FeedbackRepositoryPort>,
}

impl RatingStatsHandler {
    pub fn new(feedback_repo: Arc<dyn FeedbackRepositoryPort>) -> Self {
        Self { feedback_repo }
    }

    pub async fn handle(&self, _query: GetRatingStats) -> Result<RatingStats, ApplicationError> {
        Ok(self.feedback_repo.rating_stats().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NewFeedbackRecord;
    use crate::infrastructure::memory::InMemoryFeedbackRepository;

    async fn seeded_repo() -> Arc<InMemoryFeedbackRepository> {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        for (user, rating, order) in [("u1", 5, Some("1")), ("u1", 3, None), ("u2", 5, Some("2"))] {
            repo.insert(&NewFeedbackRecord {
                user_id: user.to_string(),
                rating,
                comment: None,
                order_id: order.map(str::to_string),
            })
            .await
            .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_list_filters_by_rating() {
        let repo = seeded_repo().await;
        let handler = ListFeedbackHandler::new(repo);

        let fives = handler
            .handle(ListFeedback {
                rating: Some(5),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(fives.len(), 2);
    }

    #[tokio::test]
    async fn test_list_rejects_out_of_range_rating_filter() {
        let repo = seeded_repo().await;
        let handler = ListFeedbackHandler::new(repo);
        let result = handler
            .handle(ListFeedback {
                rating: Some(9),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_stats_aggregation() {
        let repo = seeded_repo().await;
        let handler = RatingStatsHandler::new(repo);
        let stats = handler.handle(GetRatingStats).await.unwrap();

        assert_eq!(stats.count, 3);
        assert_eq!(stats.ratings[4], 2); // two fives
        assert_eq!(stats.ratings[2], 1); // one three
        assert!((stats.average_rating - 13.0 / 3.0).abs() < 1e-9);
    }
}
