//! Infrastructure Adapters
//!
//! Hexagonal adapters for the external identity provider.

pub mod identity;

pub use identity::*;
