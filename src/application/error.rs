//! Application layer errors
//!
//! Unified command/query error type.

use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Resource absent.
    #[error("{0}")]
    NotFound(String),

    /// Client input failed a presence/range check.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Missing, invalid or expired credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Provider-reported duplicate.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backing store failure.
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Identity provider or other upstream failure.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// Anything else.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// NotFound with the conventional "<resource> not found: <id>" message.
    pub fn not_found(resource_type: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} not found: {}", resource_type, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        use crate::application::ports::RepositoryError;
        match err {
            RepositoryError::InvalidId(msg) => Self::ValidationError(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<crate::application::ports::IdentityError> for ApplicationError {
    fn from(err: crate::application::ports::IdentityError) -> Self {
        use crate::application::ports::IdentityError;
        match err {
            IdentityError::EmailExists => Self::Conflict("email already registered".to_string()),
            IdentityError::UserNotFound => Self::NotFound("User not found".to_string()),
            IdentityError::InvalidCredentials(msg) => Self::Unauthorized(msg),
            IdentityError::InvalidToken(msg) => Self::Unauthorized(msg),
            IdentityError::WeakPassword(msg) => Self::ValidationError(msg),
            IdentityError::ProviderError(msg) => Self::ExternalServiceError(msg),
            IdentityError::NetworkError(msg) => Self::ExternalServiceError(msg),
        }
    }
}

impl From<crate::domain::order::OrderError> for ApplicationError {
    fn from(err: crate::domain::order::OrderError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<crate::domain::feedback::FeedbackError> for ApplicationError {
    fn from(err: crate::domain::feedback::FeedbackError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
