//! Auth command handlers
//!
//! Thin forwarding to the identity provider; only presence checks happen
//! here, the provider owns format and policy validation.

use std::sync::Arc;

use crate::application::commands::{DeleteAccount, LoginUser, RegisterUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{AuthTokens, IdentityProviderPort, UserRecord};

// ============================================================================
// RegisterUser
// ============================================================================

/// RegisterUser Handler
pub struct RegisterUserHandler {
    identity: Arc<dyn IdentityProviderPort>,
}

impl RegisterUserHandler {
    pub fn new(identity: Arc<dyn IdentityProviderPort>) -> Self {
        Self { identity }
    }

    pub async fn handle(
        &self,
        command: RegisterUser,
    ) -> Result<(UserRecord, AuthTokens), ApplicationError> {
        if command.email.trim().is_empty() || command.password.is_empty() {
            return Err(ApplicationError::validation(
                "email and password are required",
            ));
        }

        let (user, tokens) = self
            .identity
            .sign_up(command.email.trim(), &command.password)
            .await?;

        tracing::info!(uid = %user.uid, email = %user.email, "Account registered");
        Ok((user, tokens))
    }
}

// ============================================================================
// LoginUser
// ============================================================================

/// LoginUser Handler
pub struct LoginUserHandler {
    identity: Arc<dyn IdentityProviderPort>,
}

impl LoginUserHandler {
    pub fn new(identity: Arc<dyn IdentityProviderPort>) -> Self {
        Self { identity }
    }

    pub async fn handle(
        &self,
        command: LoginUser,
    ) -> Result<(UserRecord, AuthTokens), ApplicationError> {
        if command.email.trim().is_empty() || command.password.is_empty() {
            return Err(ApplicationError::validation(
                "email and password are required",
            ));
        }

        let (user, tokens) = self
            .identity
            .sign_in(command.email.trim(), &command.password)
            .await?;

        tracing::info!(uid = %user.uid, "User logged in");
        Ok((user, tokens))
    }
}

// ============================================================================
// DeleteAccount
// ============================================================================

/// DeleteAccount Handler
pub struct DeleteAccountHandler {
    identity: Arc<dyn IdentityProviderPort>,
}

impl DeleteAccountHandler {
    pub fn new(identity: Arc<dyn IdentityProviderPort>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self, command: DeleteAccount) -> Result<(), ApplicationError> {
        // Resolve the uid first so the log line can name it.
        let claims = self.identity.verify_token(&command.id_token).await?;
        self.identity.delete_account(&command.id_token).await?;

        tracing::info!(uid = %claims.uid, "Account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::identity::FakeIdentityClient;

    #[tokio::test]
    async fn test_register_requires_email_and_password() {
        let identity = Arc::new(FakeIdentityClient::new());
        let handler = RegisterUserHandler::new(identity);
        let result = handler
            .handle(RegisterUser {
                email: "".to_string(),
                password: "secret".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_register_then_login_round_trip() {
        let identity = Arc::new(FakeIdentityClient::new());
        let register = RegisterUserHandler::new(identity.clone());
        let login = LoginUserHandler::new(identity);

        let (user, _) = register
            .handle(RegisterUser {
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        let (logged, tokens) = login
            .handle(LoginUser {
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.uid, logged.uid);
        assert!(!tokens.id_token.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let identity = Arc::new(FakeIdentityClient::new());
        let handler = RegisterUserHandler::new(identity);
        let cmd = RegisterUser {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        };
        handler.handle(cmd.clone()).await.unwrap();
        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(ApplicationError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_account_requires_valid_token() {
        let identity = Arc::new(FakeIdentityClient::new());
        let handler = DeleteAccountHandler::new(identity);
        let result = handler
            .handle(DeleteAccount {
                id_token: "garbage".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::Unauthorized(_))));
    }
}
