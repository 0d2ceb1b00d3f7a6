//! Auth commands

/// Create an account at the identity provider.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
}

/// Exchange credentials for session tokens.
#[derive(Debug, Clone)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Delete the account behind the presented ID token.
#[derive(Debug, Clone)]
pub struct DeleteAccount {
    pub id_token: String,
}
