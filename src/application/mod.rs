//! Application Layer - use case orchestration
//!
//! Contains:
//! - ports: hexagonal port definitions (repositories, identity provider,
//!   health probe)
//! - commands: CQRS commands and their handlers
//! - queries: CQRS queries and their handlers
//! - error: application layer error

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Auth commands
    DeleteAccount,
    LoginUser,
    RegisterUser,
    // Feedback commands
    CreateFeedback,
    DeleteFeedback,
    // Order commands
    CreateOrder,
    DeleteOrder,
    UpdateOrder,
    // Handlers
    handlers::{
        CreateFeedbackHandler, CreateOrderHandler, DeleteAccountHandler, DeleteFeedbackHandler,
        DeleteOrderHandler, LoginUserHandler, RegisterUserHandler, UpdateOrderHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Health probe
    HealthProbePort,
    ProbeError,
    // Identity provider
    AuthTokens,
    IdentityError,
    IdentityProviderPort,
    UserRecord,
    // Repositories
    FeedbackFilter,
    FeedbackRecord,
    FeedbackRepositoryPort,
    NewFeedbackRecord,
    NewOrderRecord,
    OrderChanges,
    OrderFilter,
    OrderRecord,
    OrderRepositoryPort,
    RatingStats,
    RepositoryError,
};

pub use queries::{
    // Auth queries
    GetProfile,
    VerifyToken,
    // Feedback queries
    GetFeedback,
    GetRatingStats,
    ListFeedback,
    // Order queries
    GetOrder,
    ListOrders,
    // Handlers
    handlers::{
        GetFeedbackHandler, GetOrderHandler, GetProfileHandler, ListFeedbackHandler,
        ListOrdersHandler, RatingStatsHandler, VerifyTokenHandler,
    },
};
