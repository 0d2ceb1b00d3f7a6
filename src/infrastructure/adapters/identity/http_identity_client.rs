//! HTTP Identity Client - Firebase-compatible Identity Toolkit REST API
//!
//! Implements `IdentityProviderPort` over the provider's API-key endpoints:
//!
//! POST {base_url}/accounts:signUp?key=...
//! POST {base_url}/accounts:signInWithPassword?key=...
//! POST {base_url}/accounts:lookup?key=...
//! POST {base_url}/accounts:delete?key=...
//!
//! Token verification is delegated to the local `TokenVerifier`; the
//! provider is never called per verification.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::TokenVerifier;
use crate::application::ports::{AuthTokens, IdentityError, IdentityProviderPort, UserRecord};
use crate::domain::auth::DecodedClaims;

/// HTTP identity client configuration.
#[derive(Debug, Clone)]
pub struct HttpIdentityClientConfig {
    /// Identity Toolkit base URL.
    pub base_url: String,
    /// Project API key, appended to every request.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpIdentityClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

/// HTTP identity client.
pub struct HttpIdentityClient {
    client: reqwest::Client,
    config: HttpIdentityClientConfig,
    verifier: Arc<TokenVerifier>,
}

impl HttpIdentityClient {
    pub fn new(
        config: HttpIdentityClientConfig,
        verifier: Arc<TokenVerifier>,
    ) -> Result<Self, IdentityError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IdentityError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            verifier,
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/accounts:{}?key={}",
            self.config.base_url, action, self.config.api_key
        )
    }

    async fn post<T: DeserializeOwned>(
        &self,
        action: &str,
        body: &impl Serialize,
    ) -> Result<T, IdentityError> {
        let response = self
            .client
            .post(self.endpoint(action))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    IdentityError::NetworkError("identity provider timed out".to_string())
                } else {
                    IdentityError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let code = response
                .json::<ProviderErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(map_provider_error(&code));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| IdentityError::ProviderError(format!("malformed response: {}", e)))
    }
}

/// Map the provider's error code string to a typed error.
///
/// Some codes carry a trailing explanation ("WEAK_PASSWORD : Password
/// should be at least 6 characters"); only the leading token is matched.
fn map_provider_error(code: &str) -> IdentityError {
    let head = code.split_whitespace().next().unwrap_or(code);
    match head {
        "EMAIL_EXISTS" => IdentityError::EmailExists,
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            IdentityError::InvalidCredentials("invalid email or password".to_string())
        }
        "USER_NOT_FOUND" | "USER_DISABLED" => IdentityError::UserNotFound,
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" => {
            IdentityError::InvalidToken(head.to_string())
        }
        "WEAK_PASSWORD" => IdentityError::WeakPassword(code.to_string()),
        "INVALID_EMAIL" | "MISSING_PASSWORD" | "MISSING_EMAIL" => {
            IdentityError::InvalidCredentials(code.to_string())
        }
        _ => IdentityError::ProviderError(code.to_string()),
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    #[serde(rename = "idToken")]
    id_token: &'a str,
}

/// signUp / signInWithPassword response. `expiresIn` is a decimal string.
#[derive(Deserialize)]
struct AuthResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: Option<String>,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    #[serde(rename = "idToken")]
    id_token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
    #[serde(rename = "expiresIn")]
    expires_in: String,
}

#[derive(Deserialize)]
struct LookupResponse {
    users: Option<Vec<ProviderUser>>,
}

/// Account record as returned by accounts:lookup. Timestamps are
/// milliseconds-since-epoch encoded as strings.
#[derive(Deserialize)]
struct ProviderUser {
    #[serde(rename = "localId")]
    local_id: String,
    email: Option<String>,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    #[serde(rename = "emailVerified")]
    email_verified: Option<bool>,
    #[serde(rename = "createdAt")]
    created_at: Option<String>,
    #[serde(rename = "lastLoginAt")]
    last_login_at: Option<String>,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

fn parse_millis(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| s.parse::<i64>().ok())
        .and_then(DateTime::from_timestamp_millis)
}

impl AuthResponse {
    fn into_user_and_tokens(self, fallback_email: &str) -> (UserRecord, AuthTokens) {
        let user = UserRecord {
            uid: self.local_id,
            email: self.email.unwrap_or_else(|| fallback_email.to_string()),
            display_name: self.display_name,
            email_verified: false,
            created_at: None,
            last_login_at: None,
        };
        let tokens = AuthTokens {
            expires_in: self.expires_in.parse().unwrap_or(0),
            id_token: self.id_token,
            refresh_token: self.refresh_token,
        };
        (user, tokens)
    }
}

impl From<ProviderUser> for UserRecord {
    fn from(user: ProviderUser) -> Self {
        UserRecord {
            uid: user.local_id,
            email: user.email.unwrap_or_default(),
            display_name: user.display_name,
            email_verified: user.email_verified.unwrap_or(false),
            created_at: parse_millis(user.created_at.as_deref()),
            last_login_at: parse_millis(user.last_login_at.as_deref()),
        }
    }
}

#[async_trait]
impl IdentityProviderPort for HttpIdentityClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserRecord, AuthTokens), IdentityError> {
        let response: AuthResponse = self
            .post(
                "signUp",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        Ok(response.into_user_and_tokens(email))
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserRecord, AuthTokens), IdentityError> {
        let response: AuthResponse = self
            .post(
                "signInWithPassword",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        Ok(response.into_user_and_tokens(email))
    }

    async fn lookup(&self, id_token: &str) -> Result<UserRecord, IdentityError> {
        let response: LookupResponse = self.post("lookup", &TokenRequest { id_token }).await?;

        response
            .users
            .and_then(|users| users.into_iter().next())
            .map(UserRecord::from)
            .ok_or(IdentityError::UserNotFound)
    }

    async fn delete_account(&self, id_token: &str) -> Result<(), IdentityError> {
        let _: serde_json::Value = self.post("delete", &TokenRequest { id_token }).await?;
        Ok(())
    }

    async fn verify_token(&self, token: &str) -> Result<DecodedClaims, IdentityError> {
        self.verifier.verify(token).await
    }
}
