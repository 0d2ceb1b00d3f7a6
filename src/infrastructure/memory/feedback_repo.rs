//! In-memory Feedback Repository

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::application::ports::{
    FeedbackFilter, FeedbackRecord, FeedbackRepositoryPort, NewFeedbackRecord, RatingStats,
    RepositoryError,
};

/// In-memory Feedback Repository. Ids are fresh ObjectId hex strings so the
/// wire shape matches the MongoDB implementation.
pub struct InMemoryFeedbackRepository {
    entries: RwLock<Vec<FeedbackRecord>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryFeedbackRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackRepositoryPort for InMemoryFeedbackRepository {
    async fn insert(
        &self,
        feedback: &NewFeedbackRecord,
    ) -> Result<FeedbackRecord, RepositoryError> {
        let record = FeedbackRecord {
            id: ObjectId::new().to_hex(),
            user_id: feedback.user_id.clone(),
            rating: feedback.rating,
            comment: feedback.comment.clone(),
            order_id: feedback.order_id.clone(),
            created_at: Utc::now(),
        };

        self.entries.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<FeedbackRecord>, RepositoryError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned())
    }

    async fn find_filtered(
        &self,
        filter: &FeedbackFilter,
    ) -> Result<Vec<FeedbackRecord>, RepositoryError> {
        let entries = self.entries.read().await;

        let mut matched: Vec<FeedbackRecord> = entries
            .iter()
            .filter(|entry| {
                filter
                    .user_id
                    .as_ref()
                    .map_or(true, |user_id| &entry.user_id == user_id)
                    && filter
                        .order_id
                        .as_ref()
                        .map_or(true, |order_id| entry.order_id.as_ref() == Some(order_id))
                    && filter.rating.map_or(true, |rating| entry.rating == rating)
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        Ok(entries.len() < before)
    }

    async fn rating_stats(&self) -> Result<RatingStats, RepositoryError> {
        let entries = self.entries.read().await;

        let mut stats = RatingStats::default();
        let mut weighted_sum: u64 = 0;

        for entry in entries.iter() {
            if (1..=5).contains(&entry.rating) {
                stats.ratings[(entry.rating - 1) as usize] += 1;
                stats.count += 1;
                weighted_sum += entry.rating as u64;
            }
        }

        if stats.count > 0 {
            stats.average_rating = weighted_sum as f64 / stats.count as f64;
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_hex_id() {
        let repo = InMemoryFeedbackRepository::new();
        let record = repo
            .insert(&NewFeedbackRecord {
                user_id: "u1".to_string(),
                rating: 4,
                comment: None,
                order_id: None,
            })
            .await
            .unwrap();

        assert_eq!(record.id.len(), 24);
        assert!(repo.find_by_id(&record.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_empty_stats() {
        let repo = InMemoryFeedbackRepository::new();
        let stats = repo.rating_stats().await.unwrap();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_rating, 0.0);
    }
}
