//! Feedback HTTP Handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::{
    CreateFeedback, DeleteFeedback, GetFeedback, GetRatingStats, ListFeedback,
};
use crate::infrastructure::http::dto::{
    CreateFeedbackRequest, FeedbackDto, FeedbackListResponse, FeedbackResponse,
    ListFeedbackParams, MessageResponse, RatingStatsResponse,
};
use crate::infrastructure::http::error::{ApiError, ApiJson};
use crate::infrastructure::http::state::FeedbackState;

/// GET /feedback
pub async fn list_feedback(
    State(state): State<Arc<FeedbackState>>,
    Query(params): Query<ListFeedbackParams>,
) -> Result<Json<FeedbackListResponse>, ApiError> {
    let feedbacks = state
        .list_feedback_handler
        .handle(ListFeedback {
            user_id: params.user_id,
            order_id: params.order_id,
            rating: params.rating,
        })
        .await?;

    let feedbacks: Vec<FeedbackDto> = feedbacks.into_iter().map(FeedbackDto::from).collect();

    Ok(Json(FeedbackListResponse {
        success: true,
        count: feedbacks.len(),
        feedbacks,
    }))
}

/// GET /feedback/stats
pub async fn rating_stats(
    State(state): State<Arc<FeedbackState>>,
) -> Result<Json<RatingStatsResponse>, ApiError> {
    let stats = state.rating_stats_handler.handle(GetRatingStats).await?;

    Ok(Json(RatingStatsResponse {
        success: true,
        stats: stats.into(),
    }))
}

/// GET /feedback/:id
pub async fn get_feedback(
    State(state): State<Arc<FeedbackState>>,
    Path(id): Path<String>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let feedback = state.get_feedback_handler.handle(GetFeedback { id }).await?;

    Ok(Json(FeedbackResponse {
        success: true,
        feedback: feedback.into(),
    }))
}

/// POST /feedback
pub async fn create_feedback(
    State(state): State<Arc<FeedbackState>>,
    ApiJson(body): ApiJson<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackResponse>), ApiError> {
    let (user_id, rating) = match (body.user_id, body.rating) {
        (Some(user_id), Some(rating)) => (user_id, rating),
        (user_id, rating) => {
            let mut missing = Vec::new();
            if user_id.is_none() {
                missing.push("user_id");
            }
            if rating.is_none() {
                missing.push("rating");
            }
            return Err(ApiError::BadRequest(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }
    };

    let feedback = state
        .create_feedback_handler
        .handle(CreateFeedback {
            user_id,
            rating,
            comment: body.comment,
            order_id: body.order_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FeedbackResponse {
            success: true,
            feedback: feedback.into(),
        }),
    ))
}

/// DELETE /feedback/:id
pub async fn delete_feedback(
    State(state): State<Arc<FeedbackState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .delete_feedback_handler
        .handle(DeleteFeedback { id })
        .await?;

    Ok(Json(MessageResponse::new("Feedback deleted successfully")))
}
