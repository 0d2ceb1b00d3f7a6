//! Auth HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::application::{
    DeleteAccount, GetProfile, LoginUser, RegisterUser, VerifyToken,
};
use crate::infrastructure::http::dto::{
    ClaimsResponse, LoginRequest, MessageResponse, RegisterRequest, SessionResponse,
    UserResponse, VerifyRequest,
};
use crate::infrastructure::http::error::{ApiError, ApiJson};
use crate::infrastructure::http::state::AuthState;

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))
}

/// POST /auth/register
pub async fn register(
    State(state): State<Arc<AuthState>>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let (email, password) = match (body.email, body.password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(ApiError::BadRequest(
                "missing required fields: email, password".to_string(),
            ))
        }
    };

    let (user, _tokens) = state
        .register_user_handler
        .handle(RegisterUser { email, password })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            user: user.into(),
        }),
    ))
}

/// POST /auth/login
pub async fn login(
    State(state): State<Arc<AuthState>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (email, password) = match (body.email, body.password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(ApiError::BadRequest(
                "missing required fields: email, password".to_string(),
            ))
        }
    };

    let (user, tokens) = state
        .login_user_handler
        .handle(LoginUser { email, password })
        .await?;

    Ok(Json(SessionResponse::new(user, tokens)))
}

/// POST /auth/verify
pub async fn verify(
    State(state): State<Arc<AuthState>>,
    ApiJson(body): ApiJson<VerifyRequest>,
) -> Result<Json<ClaimsResponse>, ApiError> {
    let token = body
        .token
        .ok_or_else(|| ApiError::BadRequest("missing required fields: token".to_string()))?;

    let claims = state.verify_token_handler.handle(VerifyToken { token }).await?;

    Ok(Json(ClaimsResponse {
        success: true,
        claims,
    }))
}

/// GET /auth/me
pub async fn me(
    State(state): State<Arc<AuthState>>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let id_token = bearer_token(&headers)?;
    let user = state.get_profile_handler.handle(GetProfile { id_token }).await?;

    Ok(Json(UserResponse {
        success: true,
        user: user.into(),
    }))
}

/// DELETE /auth/me
pub async fn delete_me(
    State(state): State<Arc<AuthState>>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, ApiError> {
    let id_token = bearer_token(&headers)?;
    state
        .delete_account_handler
        .handle(DeleteAccount { id_token })
        .await?;

    Ok(Json(MessageResponse::new("Account deleted successfully")))
}
