//! Fake Identity Client - deterministic in-memory provider for tests
//!
//! Accounts live in a map keyed by email; issued tokens follow the
//! `valid-token-<uid>` scheme so tests can mint credentials directly.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::application::ports::{AuthTokens, IdentityError, IdentityProviderPort, UserRecord};
use crate::domain::auth::DecodedClaims;

const TOKEN_PREFIX: &str = "valid-token-";
const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Clone)]
struct FakeAccount {
    uid: String,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl FakeAccount {
    fn to_record(&self) -> UserRecord {
        UserRecord {
            uid: self.uid.clone(),
            email: self.email.clone(),
            display_name: None,
            email_verified: false,
            created_at: Some(self.created_at),
            last_login_at: self.last_login_at,
        }
    }
}

/// Fake identity provider.
pub struct FakeIdentityClient {
    accounts: DashMap<String, FakeAccount>,
    next_uid: AtomicU64,
}

impl FakeIdentityClient {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            next_uid: AtomicU64::new(1),
        }
    }

    /// The token this fake would issue for a uid.
    pub fn token_for(uid: &str) -> String {
        format!("{}{}", TOKEN_PREFIX, uid)
    }

    fn tokens_for(&self, uid: &str) -> AuthTokens {
        AuthTokens {
            id_token: Self::token_for(uid),
            refresh_token: format!("refresh-{}", uid),
            expires_in: 3600,
        }
    }

    fn uid_from_token(&self, token: &str) -> Result<String, IdentityError> {
        let uid = token
            .strip_prefix(TOKEN_PREFIX)
            .ok_or_else(|| IdentityError::InvalidToken("unrecognized token".to_string()))?;

        if self.accounts.iter().any(|entry| entry.uid == uid) {
            Ok(uid.to_string())
        } else {
            Err(IdentityError::InvalidToken("token has no account".to_string()))
        }
    }

    fn account_by_uid(&self, uid: &str) -> Option<FakeAccount> {
        self.accounts
            .iter()
            .find(|entry| entry.uid == uid)
            .map(|entry| entry.value().clone())
    }
}

impl Default for FakeIdentityClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProviderPort for FakeIdentityClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserRecord, AuthTokens), IdentityError> {
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(IdentityError::WeakPassword(format!(
                "password should be at least {} characters",
                MIN_PASSWORD_CHARS
            )));
        }
        if self.accounts.contains_key(email) {
            return Err(IdentityError::EmailExists);
        }

        let uid = format!("fake-uid-{}", self.next_uid.fetch_add(1, Ordering::SeqCst));
        let account = FakeAccount {
            uid: uid.clone(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
            last_login_at: None,
        };
        let record = account.to_record();
        self.accounts.insert(email.to_string(), account);

        Ok((record, self.tokens_for(&uid)))
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(UserRecord, AuthTokens), IdentityError> {
        let mut entry = self.accounts.get_mut(email).ok_or_else(|| {
            IdentityError::InvalidCredentials("invalid email or password".to_string())
        })?;

        if entry.password != password {
            return Err(IdentityError::InvalidCredentials(
                "invalid email or password".to_string(),
            ));
        }

        entry.last_login_at = Some(Utc::now());
        let record = entry.to_record();
        let uid = entry.uid.clone();
        drop(entry);

        Ok((record, self.tokens_for(&uid)))
    }

    async fn lookup(&self, id_token: &str) -> Result<UserRecord, IdentityError> {
        let uid = self.uid_from_token(id_token)?;
        self.account_by_uid(&uid)
            .map(|account| account.to_record())
            .ok_or(IdentityError::UserNotFound)
    }

    async fn delete_account(&self, id_token: &str) -> Result<(), IdentityError> {
        let uid = self.uid_from_token(id_token)?;
        self.accounts.retain(|_, account| account.uid != uid);
        Ok(())
    }

    async fn verify_token(&self, token: &str) -> Result<DecodedClaims, IdentityError> {
        let uid = self.uid_from_token(token)?;
        let account = self.account_by_uid(&uid).ok_or(IdentityError::UserNotFound)?;

        let now = Utc::now().timestamp() as u64;
        Ok(DecodedClaims {
            uid,
            email: Some(account.email),
            email_verified: Some(false),
            name: None,
            iat: now,
            exp: now + 3600,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_account_lifecycle() {
        let client = FakeIdentityClient::new();

        let (user, tokens) = client.sign_up("a@b.com", "secret1").await.unwrap();
        assert_eq!(user.email, "a@b.com");

        let found = client.lookup(&tokens.id_token).await.unwrap();
        assert_eq!(found.uid, user.uid);

        client.delete_account(&tokens.id_token).await.unwrap();
        assert!(matches!(
            client.lookup(&tokens.id_token).await,
            Err(IdentityError::InvalidToken(_))
        ));
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let client = FakeIdentityClient::new();
        assert!(matches!(
            client.sign_up("a@b.com", "short").await,
            Err(IdentityError::WeakPassword(_))
        ));
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let client = FakeIdentityClient::new();
        client.sign_up("a@b.com", "secret1").await.unwrap();
        assert!(matches!(
            client.sign_in("a@b.com", "wrong-1").await,
            Err(IdentityError::InvalidCredentials(_))
        ));
    }
}
