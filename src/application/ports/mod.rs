//! Application Ports
//!
//! Outbound abstractions between the application and infrastructure layers.

mod health;
mod identity;
mod repositories;

pub use health::{HealthProbePort, ProbeError};
pub use identity::{AuthTokens, IdentityError, IdentityProviderPort, UserRecord};
pub use repositories::{
    FeedbackFilter, FeedbackRecord, FeedbackRepositoryPort, NewFeedbackRecord, NewOrderRecord,
    OrderChanges, OrderFilter, OrderRecord, OrderRepositoryPort, RatingStats, RepositoryError,
};
