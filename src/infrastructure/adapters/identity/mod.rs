//! Identity provider adapters
//!
//! - `HttpIdentityClient`: Firebase-compatible Identity Toolkit REST client
//! - `TokenVerifier`: local RS256 ID-token verification with a cached key set
//! - `IdentityHealthProbe`: key-set freshness as the service's liveness signal
//! - `FakeIdentityClient`: deterministic in-memory twin for tests

mod fake_identity_client;
mod http_identity_client;
mod token_verifier;

pub use fake_identity_client::FakeIdentityClient;
pub use http_identity_client::{HttpIdentityClient, HttpIdentityClientConfig};
pub use token_verifier::{IdentityHealthProbe, TokenVerifier, TokenVerifierConfig};
