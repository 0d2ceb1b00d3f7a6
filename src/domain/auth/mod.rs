//! Auth Context
//!
//! Users are owned by the external identity provider. The services hold a
//! decoded token's claims only for the duration of a request; nothing is
//! persisted locally.

mod claims;

pub use claims::DecodedClaims;
