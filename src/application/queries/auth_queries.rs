//! Auth queries

/// Verify an ID token and return its decoded claims.
#[derive(Debug, Clone)]
pub struct VerifyToken {
    pub token: String,
}

/// Fetch the provider account behind an ID token.
#[derive(Debug, Clone)]
pub struct GetProfile {
    pub id_token: String,
}
