//! HTTP Routes
//!
//! One router per service. Resource routes sit behind the health gate;
//! `/health` and the catch-all fallback do not.
//!
//! auth-service:
//! - POST   /auth/register    create an account
//! - POST   /auth/login       exchange credentials for tokens
//! - POST   /auth/verify      verify an ID token, return claims
//! - GET    /auth/me          account behind the bearer token
//! - DELETE /auth/me          delete the account behind the bearer token
//!
//! order-service:
//! - GET    /orders           list (filters: user_id, status)
//! - POST   /orders           create (status starts as "pending")
//! - GET    /orders/:id       fetch one
//! - PUT    /orders/:id       update status / items / total
//! - DELETE /orders/:id       delete one
//!
//! feedback-service:
//! - GET    /feedback         list (filters: user_id, order_id, rating)
//! - POST   /feedback         create (rating 1..=5)
//! - GET    /feedback/stats   rating aggregation
//! - GET    /feedback/:id     fetch one
//! - DELETE /feedback/:id     delete one
//!
//! every service:
//! - GET /health              probe outcome envelope
//! - anything else            404 "Rota não encontrada"

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};

use super::error::ErrorResponse;
use super::handlers;
use super::middleware::health_gate;
use super::state::{AuthState, FeedbackState, OrderState, ServiceState};

/// Catch-all for unknown routes.
async fn route_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Rota não encontrada")),
    )
}

/// Order service router.
pub fn order_routes(state: Arc<OrderState>) -> Router {
    let resources = Router::new()
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route(
            "/orders/:id",
            get(handlers::get_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order),
        )
        .route_layer(middleware::from_fn_with_state(
            state.health_probe(),
            health_gate,
        ));

    Router::new()
        .route("/health", get(handlers::health::<OrderState>))
        .merge(resources)
        .fallback(route_not_found)
        .with_state(state)
}

/// Feedback service router.
pub fn feedback_routes(state: Arc<FeedbackState>) -> Router {
    let resources = Router::new()
        .route(
            "/feedback",
            get(handlers::list_feedback).post(handlers::create_feedback),
        )
        .route("/feedback/stats", get(handlers::rating_stats))
        .route(
            "/feedback/:id",
            get(handlers::get_feedback).delete(handlers::delete_feedback),
        )
        .route_layer(middleware::from_fn_with_state(
            state.health_probe(),
            health_gate,
        ));

    Router::new()
        .route("/health", get(handlers::health::<FeedbackState>))
        .merge(resources)
        .fallback(route_not_found)
        .with_state(state)
}

/// Auth service router.
pub fn auth_routes(state: Arc<AuthState>) -> Router {
    let resources = Router::new()
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/auth/verify", post(handlers::verify))
        .route("/auth/me", get(handlers::me).delete(handlers::delete_me))
        .route_layer(middleware::from_fn_with_state(
            state.health_probe(),
            health_gate,
        ));

    Router::new()
        .route("/health", get(handlers::health::<AuthState>))
        .merge(resources)
        .fallback(route_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{HealthProbePort, IdentityProviderPort, ProbeError};
    use crate::infrastructure::adapters::identity::FakeIdentityClient;
    use crate::infrastructure::memory::{InMemoryFeedbackRepository, InMemoryOrderRepository};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    struct StubProbe {
        name: &'static str,
        healthy: bool,
    }

    #[async_trait]
    impl HealthProbePort for StubProbe {
        fn dependency_name(&self) -> &'static str {
            self.name
        }

        async fn probe(&self) -> Result<(), ProbeError> {
            if self.healthy {
                Ok(())
            } else {
                Err(ProbeError::Unreachable("connection refused".to_string()))
            }
        }
    }

    fn order_app(healthy: bool) -> Router {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let probe = Arc::new(StubProbe {
            name: "mysql",
            healthy,
        });
        order_routes(Arc::new(OrderState::new(repo, probe)))
    }

    fn feedback_app() -> Router {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        let probe = Arc::new(StubProbe {
            name: "mongodb",
            healthy: true,
        });
        feedback_routes(Arc::new(FeedbackState::new(repo, probe)))
    }

    fn auth_app() -> (Router, Arc<FakeIdentityClient>) {
        let identity = Arc::new(FakeIdentityClient::new());
        let probe = Arc::new(StubProbe {
            name: "firebase",
            healthy: true,
        });
        let router = auth_routes(Arc::new(AuthState::new(identity.clone(), probe)));
        (router, identity)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_order_returns_201_pending() {
        let app = order_app(true);
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/orders",
                json!({"user_id": "u1", "items": [{"name": "pizza", "qty": 1}], "total": 42.5}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["order"]["status"], "pending");
        assert_eq!(body["order"]["id"], 1);
    }

    #[tokio::test]
    async fn test_create_order_missing_fields_is_400() {
        let app = order_app(true);
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/orders",
                json!({"user_id": "u1"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("items") && error.contains("total"));
    }

    #[tokio::test]
    async fn test_get_unknown_order_is_404() {
        let app = order_app(true);
        let response = app.oneshot(get_request("/orders/999")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_non_numeric_order_id_is_400() {
        let app = order_app(true);
        let response = app.oneshot(get_request("/orders/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_then_list_by_status() {
        let app = order_app(true);

        let create = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/orders",
                json!({"user_id": "u1", "items": [1], "total": "10.00"}),
            ))
            .await
            .unwrap();
        assert_eq!(create.status(), StatusCode::CREATED);

        let update = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/orders/1",
                json!({"status": "ready"}),
            ))
            .await
            .unwrap();
        assert_eq!(update.status(), StatusCode::OK);
        let body = response_json(update).await;
        assert_eq!(body["order"]["status"], "ready");

        let list = app
            .oneshot(get_request("/orders?status=ready"))
            .await
            .unwrap();
        let body = response_json(list).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["orders"][0]["status"], "ready");
    }

    #[tokio::test]
    async fn test_update_with_unknown_status_is_400() {
        let app = order_app(true);
        app.clone()
            .oneshot(json_request(
                Method::POST,
                "/orders",
                json!({"user_id": "u1", "items": [1], "total": 1}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                Method::PUT,
                "/orders/1",
                json!({"status": "shipped"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_order_then_404() {
        let app = order_app(true);
        app.clone()
            .oneshot(json_request(
                Method::POST,
                "/orders",
                json!({"user_id": "u1", "items": [1], "total": 1}),
            ))
            .await
            .unwrap();

        let delete = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/orders/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(delete.status(), StatusCode::OK);

        let fetch = app.oneshot(get_request("/orders/1")).await.unwrap();
        assert_eq!(fetch.status(), StatusCode::NOT_FOUND);
    }

    // ------------------------------------------------------------------
    // Health gate and fallback
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_health_reports_connected() {
        let app = order_app(true);
        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "orders");
        assert_eq!(body["mysql"], "Connected");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_health_reports_disconnected_with_503() {
        let app = order_app(false);
        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = response_json(response).await;
        assert_eq!(body["status"], "ERROR");
        assert_eq!(body["mysql"], "Disconnected");
    }

    #[tokio::test]
    async fn test_gate_refuses_resource_requests_when_down() {
        let app = order_app(false);
        let response = app.oneshot(get_request("/orders")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_unknown_route_is_portuguese_404() {
        let app = order_app(true);
        let response = app.oneshot(get_request("/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Rota não encontrada");
    }

    #[tokio::test]
    async fn test_fallback_is_not_gated() {
        let app = order_app(false);
        let response = app.oneshot(get_request("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ------------------------------------------------------------------
    // Feedback
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_feedback_and_fetch() {
        let app = feedback_app();
        let create = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/feedback",
                json!({"user_id": "u1", "rating": 5, "comment": "ótimo", "order_id": "7"}),
            ))
            .await
            .unwrap();

        assert_eq!(create.status(), StatusCode::CREATED);
        let body = response_json(create).await;
        let id = body["feedback"]["id"].as_str().unwrap().to_string();
        assert_eq!(body["feedback"]["rating"], 5);

        let fetch = app
            .oneshot(get_request(&format!("/feedback/{}", id)))
            .await
            .unwrap();
        assert_eq!(fetch.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rating_out_of_range_is_400() {
        let app = feedback_app();
        for rating in [0, 6] {
            let response = app
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/feedback",
                    json!({"user_id": "u1", "rating": rating}),
                ))
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                StatusCode::BAD_REQUEST,
                "rating {} should be rejected",
                rating
            );
        }
    }

    #[tokio::test]
    async fn test_feedback_stats_endpoint() {
        let app = feedback_app();
        for rating in [5, 5, 3] {
            app.clone()
                .oneshot(json_request(
                    Method::POST,
                    "/feedback",
                    json!({"user_id": "u1", "rating": rating}),
                ))
                .await
                .unwrap();
        }

        let response = app.oneshot(get_request("/feedback/stats")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["stats"]["count"], 3);
        assert_eq!(body["stats"]["ratings"]["5"], 2);
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_register_login_verify_flow() {
        let (app, _) = auth_app();

        let register = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/auth/register",
                json!({"email": "a@b.com", "password": "secret1"}),
            ))
            .await
            .unwrap();
        assert_eq!(register.status(), StatusCode::CREATED);
        let body = response_json(register).await;
        let uid = body["user"]["uid"].as_str().unwrap().to_string();

        let login = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/auth/login",
                json!({"email": "a@b.com", "password": "secret1"}),
            ))
            .await
            .unwrap();
        assert_eq!(login.status(), StatusCode::OK);
        let body = response_json(login).await;
        let token = body["id_token"].as_str().unwrap().to_string();

        let verify = app
            .oneshot(json_request(
                Method::POST,
                "/auth/verify",
                json!({"token": token}),
            ))
            .await
            .unwrap();
        assert_eq!(verify.status(), StatusCode::OK);
        let body = response_json(verify).await;
        assert_eq!(body["claims"]["uid"], uid.as_str());
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_401() {
        let (app, identity) = auth_app();
        identity.sign_up("a@b.com", "secret1").await.unwrap();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/auth/login",
                json!({"email": "a@b.com", "password": "wrong-1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_duplicate_register_is_409() {
        let (app, identity) = auth_app();
        identity.sign_up("a@b.com", "secret1").await.unwrap();

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/auth/register",
                json!({"email": "a@b.com", "password": "secret1"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_me_requires_bearer_token() {
        let (app, identity) = auth_app();
        let (user, tokens) = identity.sign_up("a@b.com", "secret1").await.unwrap();

        let anonymous = app.clone().oneshot(get_request("/auth/me")).await.unwrap();
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

        let me = app
            .oneshot(
                Request::builder()
                    .uri("/auth/me")
                    .header(header::AUTHORIZATION, format!("Bearer {}", tokens.id_token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(me.status(), StatusCode::OK);
        let body = response_json(me).await;
        assert_eq!(body["user"]["uid"], user.uid.as_str());
    }

    #[tokio::test]
    async fn test_auth_health_names_firebase() {
        let (app, _) = auth_app();
        let response = app.oneshot(get_request("/health")).await.unwrap();
        let body = response_json(response).await;
        assert_eq!(body["service"], "auth");
        assert_eq!(body["firebase"], "Connected");
    }
}
