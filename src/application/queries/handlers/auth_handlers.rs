//! Auth query handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{IdentityProviderPort, UserRecord};
use crate::application::queries::{GetProfile, VerifyToken};
use crate::domain::auth::DecodedClaims;

/// VerifyToken Handler - local verification, no provider round-trip.
pub struct VerifyTokenHandler {
    identity: Arc<dyn IdentityProviderPort>,
}

impl VerifyTokenHandler {
    pub fn new(identity: Arc<dyn IdentityProviderPort>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self, query: VerifyToken) -> Result<DecodedClaims, ApplicationError> {
        if query.token.trim().is_empty() {
            return Err(ApplicationError::unauthorized("token is required"));
        }
        Ok(self.identity.verify_token(query.token.trim()).await?)
    }
}

/// GetProfile Handler - relays the provider account record.
pub struct GetProfileHandler {
    identity: Arc<dyn IdentityProviderPort>,
}

impl GetProfileHandler {
    pub fn new(identity: Arc<dyn IdentityProviderPort>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self, query: GetProfile) -> Result<UserRecord, ApplicationError> {
        Ok(self.identity.lookup(&query.id_token).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::identity::FakeIdentityClient;

    #[tokio::test]
    async fn test_verify_empty_token_is_unauthorized() {
        let identity = Arc::new(FakeIdentityClient::new());
        let handler = VerifyTokenHandler::new(identity);
        let result = handler
            .handle(VerifyToken {
                token: "   ".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_verify_known_token_returns_claims() {
        let identity = Arc::new(FakeIdentityClient::new());
        let (user, tokens) = identity.sign_up("a@b.com", "secret1").await.unwrap();

        let handler = VerifyTokenHandler::new(identity);
        let claims = handler
            .handle(VerifyToken {
                token: tokens.id_token,
            })
            .await
            .unwrap();
        assert_eq!(claims.uid, user.uid);
    }
}
