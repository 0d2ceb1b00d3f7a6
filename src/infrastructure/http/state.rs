//! Application State
//!
//! One state struct per service, each holding its health probe and the
//! command/query handlers for its resource.

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateFeedbackHandler, CreateOrderHandler, DeleteAccountHandler, DeleteFeedbackHandler,
    DeleteOrderHandler, LoginUserHandler, RegisterUserHandler, UpdateOrderHandler,
    // Query handlers
    GetFeedbackHandler, GetOrderHandler, GetProfileHandler, ListFeedbackHandler,
    ListOrdersHandler, RatingStatsHandler, VerifyTokenHandler,
    // Ports
    FeedbackRepositoryPort, HealthProbePort, IdentityProviderPort, OrderRepositoryPort,
};

/// Common surface every service state exposes to the shared handlers.
pub trait ServiceState: Send + Sync + 'static {
    /// Name reported in the health envelope.
    fn service_name(&self) -> &'static str;

    /// Probe for the service's backing dependency.
    fn health_probe(&self) -> Arc<dyn HealthProbePort>;
}

// ============================================================================
// Order service
// ============================================================================

/// Order service state.
pub struct OrderState {
    pub health_probe: Arc<dyn HealthProbePort>,

    // Command handlers
    pub create_order_handler: CreateOrderHandler,
    pub update_order_handler: UpdateOrderHandler,
    pub delete_order_handler: DeleteOrderHandler,

    // Query handlers
    pub get_order_handler: GetOrderHandler,
    pub list_orders_handler: ListOrdersHandler,
}

impl OrderState {
    pub fn new(
        order_repo: Arc<dyn OrderRepositoryPort>,
        health_probe: Arc<dyn HealthProbePort>,
    ) -> Self {
        Self {
            health_probe,
            create_order_handler: CreateOrderHandler::new(order_repo.clone()),
            update_order_handler: UpdateOrderHandler::new(order_repo.clone()),
            delete_order_handler: DeleteOrderHandler::new(order_repo.clone()),
            get_order_handler: GetOrderHandler::new(order_repo.clone()),
            list_orders_handler: ListOrdersHandler::new(order_repo),
        }
    }
}

impl ServiceState for OrderState {
    fn service_name(&self) -> &'static str {
        "orders"
    }

    fn health_probe(&self) -> Arc<dyn HealthProbePort> {
        self.health_probe.clone()
    }
}

// ============================================================================
// Feedback service
// ============================================================================

/// Feedback service state.
pub struct FeedbackState {
    pub health_probe: Arc<dyn HealthProbePort>,

    // Command handlers
    pub create_feedback_handler: CreateFeedbackHandler,
    pub delete_feedback_handler: DeleteFeedbackHandler,

    // Query handlers
    pub get_feedback_handler: GetFeedbackHandler,
    pub list_feedback_handler: ListFeedbackHandler,
    pub rating_stats_handler: RatingStatsHandler,
}

impl FeedbackState {
    pub fn new(
        feedback_repo: Arc<dyn FeedbackRepositoryPort>,
        health_probe: Arc<dyn HealthProbePort>,
    ) -> Self {
        Self {
            health_probe,
            create_feedback_handler: CreateFeedbackHandler::new(feedback_repo.clone()),
            delete_feedback_handler: DeleteFeedbackHandler::new(feedback_repo.clone()),
            get_feedback_handler: GetFeedbackHandler::new(feedback_repo.clone()),
            list_feedback_handler: ListFeedbackHandler::new(feedback_repo.clone()),
            rating_stats_handler: RatingStatsHandler::new(feedback_repo),
        }
    }
}

impl ServiceState for FeedbackState {
    fn service_name(&self) -> &'static str {
        "feedback"
    }

    fn health_probe(&self) -> Arc<dyn HealthProbePort> {
        self.health_probe.clone()
    }
}

// ============================================================================
// Auth service
// ============================================================================

/// Auth service state.
pub struct AuthState {
    pub health_probe: Arc<dyn HealthProbePort>,

    // Command handlers
    pub register_user_handler: RegisterUserHandler,
    pub login_user_handler: LoginUserHandler,
    pub delete_account_handler: DeleteAccountHandler,

    // Query handlers
    pub verify_token_handler: VerifyTokenHandler,
    pub get_profile_handler: GetProfileHandler,
}

impl AuthState {
    pub fn new(
        identity: Arc<dyn IdentityProviderPort>,
        health_probe: Arc<dyn HealthProbePort>,
    ) -> Self {
        Self {
            health_probe,
            register_user_handler: RegisterUserHandler::new(identity.clone()),
            login_user_handler: LoginUserHandler::new(identity.clone()),
            delete_account_handler: DeleteAccountHandler::new(identity.clone()),
            verify_token_handler: VerifyTokenHandler::new(identity.clone()),
            get_profile_handler: GetProfileHandler::new(identity),
        }
    }
}

impl ServiceState for AuthState {
    fn service_name(&self) -> &'static str {
        "auth"
    }

    fn health_probe(&self) -> Arc<dyn HealthProbePort> {
        self.health_probe.clone()
    }
}
