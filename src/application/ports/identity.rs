//! Identity Provider Port
//!
//! Abstraction over the external account store. The real implementation
//! talks to a Firebase-compatible Identity Toolkit REST API; a fake twin
//! backs the tests. Accounts are never persisted by this codebase.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::auth::DecodedClaims;

/// Identity provider error.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("email already registered")]
    EmailExists,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("weak password: {0}")]
    WeakPassword(String),

    #[error("provider error: {0}")]
    ProviderError(String),

    #[error("network error: {0}")]
    NetworkError(String),
}

/// An account record as relayed from the provider.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Session tokens issued by the provider.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub id_token: String,
    pub refresh_token: String,
    /// Seconds until `id_token` expires.
    pub expires_in: u64,
}

/// Identity Provider Port.
#[async_trait]
pub trait IdentityProviderPort: Send + Sync {
    /// Create an account with email and password.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserRecord, AuthTokens), IdentityError>;

    /// Exchange email and password for session tokens.
    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserRecord, AuthTokens), IdentityError>;

    /// Fetch the account behind an ID token.
    async fn lookup(&self, id_token: &str) -> Result<UserRecord, IdentityError>;

    /// Delete the account behind an ID token.
    async fn delete_account(&self, id_token: &str) -> Result<(), IdentityError>;

    /// Verify an ID token locally and return its claims. Does not call the
    /// provider except to refresh the signing key set.
    async fn verify_token(&self, token: &str) -> Result<DecodedClaims, IdentityError>;
}
