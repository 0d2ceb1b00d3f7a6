//! Auth Context - Decoded token claims

use serde::{Deserialize, Serialize};

/// Claims decoded from a verified ID token.
///
/// `uid` is the provider-assigned subject; everything else is optional
/// profile data relayed as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedClaims {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: u64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
}
