//! MongoDB Feedback Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    FeedbackFilter, FeedbackRecord, FeedbackRepositoryPort, NewFeedbackRecord, RatingStats,
    RepositoryError,
};

const COLLECTION: &str = "feedback";

/// MongoDB Feedback Repository.
pub struct MongoFeedbackRepository {
    database: Database,
}

impl MongoFeedbackRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn collection(&self) -> Collection<FeedbackDocument> {
        self.database.collection(COLLECTION)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct FeedbackDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    user_id: String,
    rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_id: Option<String>,
    created_at: mongodb::bson::DateTime,
}

impl From<FeedbackDocument> for FeedbackRecord {
    fn from(doc: FeedbackDocument) -> Self {
        FeedbackRecord {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            user_id: doc.user_id,
            rating: doc.rating.clamp(0, u8::MAX as i32) as u8,
            comment: doc.comment,
            order_id: doc.order_id,
            created_at: DateTime::from_timestamp_millis(doc.created_at.timestamp_millis())
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id)
        .map_err(|_| RepositoryError::InvalidId(format!("malformed feedback id: {}", id)))
}

fn db_error(e: mongodb::error::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl FeedbackRepositoryPort for MongoFeedbackRepository {
    async fn insert(
        &self,
        feedback: &NewFeedbackRecord,
    ) -> Result<FeedbackRecord, RepositoryError> {
        let document = FeedbackDocument {
            id: None,
            user_id: feedback.user_id.clone(),
            rating: feedback.rating as i32,
            comment: feedback.comment.clone(),
            order_id: feedback.order_id.clone(),
            created_at: mongodb::bson::DateTime::now(),
        };

        let result = self
            .collection()
            .insert_one(&document)
            .await
            .map_err(db_error)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| {
                RepositoryError::SerializationError("store did not assign an ObjectId".to_string())
            })?;

        Ok(FeedbackRecord::from(FeedbackDocument {
            id: Some(id),
            ..document
        }))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<FeedbackRecord>, RepositoryError> {
        let oid = parse_object_id(id)?;

        let document = self
            .collection()
            .find_one(doc! { "_id": oid })
            .await
            .map_err(db_error)?;

        Ok(document.map(FeedbackRecord::from))
    }

    async fn find_filtered(
        &self,
        filter: &FeedbackFilter,
    ) -> Result<Vec<FeedbackRecord>, RepositoryError> {
        let mut query = Document::new();
        if let Some(user_id) = &filter.user_id {
            query.insert("user_id", user_id);
        }
        if let Some(order_id) = &filter.order_id {
            query.insert("order_id", order_id);
        }
        if let Some(rating) = filter.rating {
            query.insert("rating", rating as i32);
        }

        let cursor = self
            .collection()
            .find(query)
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(db_error)?;

        let documents: Vec<FeedbackDocument> = cursor.try_collect().await.map_err(db_error)?;

        Ok(documents.into_iter().map(FeedbackRecord::from).collect())
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let oid = parse_object_id(id)?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(db_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn rating_stats(&self) -> Result<RatingStats, RepositoryError> {
        let pipeline = vec![doc! {
            "$group": {
                "_id": "$rating",
                "count": { "$sum": 1 },
            }
        }];

        let mut cursor = self
            .database
            .collection::<Document>(COLLECTION)
            .aggregate(pipeline)
            .await
            .map_err(db_error)?;

        let mut stats = RatingStats::default();
        let mut weighted_sum: u64 = 0;

        while let Some(group) = cursor.try_next().await.map_err(db_error)? {
            let rating = group
                .get_i32("_id")
                .map(i64::from)
                .or_else(|_| group.get_i64("_id"))
                .unwrap_or(0);
            let count = group
                .get_i32("count")
                .map(i64::from)
                .or_else(|_| group.get_i64("count"))
                .unwrap_or(0) as u64;

            if (1..=5).contains(&rating) {
                stats.ratings[(rating - 1) as usize] = count;
                stats.count += count;
                weighted_sum += rating as u64 * count;
            }
        }

        if stats.count > 0 {
            stats.average_rating = weighted_sum as f64 / stats.count as f64;
        }

        Ok(stats)
    }
}
