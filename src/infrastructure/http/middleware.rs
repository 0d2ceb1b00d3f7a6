//! HTTP Middleware
//!
//! - health gate: probe the backing dependency before admitting a request
//! - 4xx/5xx logging

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use crate::application::ports::HealthProbePort;

/// Pre-flight health gate.
///
/// Runs the service's dependency probe before every resource request and
/// short-circuits with 503 when the dependency is unreachable. `/health`
/// is routed outside this layer.
pub async fn health_gate(
    State(probe): State<Arc<dyn HealthProbePort>>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(e) = probe.probe().await {
        tracing::error!(
            dependency = probe.dependency_name(),
            error = %e,
            "Health probe failed, refusing request"
        );
        return ApiError::ServiceUnavailable("service temporarily unavailable".to_string())
            .into_response();
    }

    next.run(request).await
}

/// HTTP status error logging middleware.
///
/// Logs 4xx responses as warnings and 5xx responses as errors.
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ProbeError;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    struct AlwaysUp;

    #[async_trait]
    impl HealthProbePort for AlwaysUp {
        fn dependency_name(&self) -> &'static str {
            "mysql"
        }

        async fn probe(&self) -> Result<(), ProbeError> {
            Ok(())
        }
    }

    struct AlwaysDown;

    #[async_trait]
    impl HealthProbePort for AlwaysDown {
        fn dependency_name(&self) -> &'static str {
            "mysql"
        }

        async fn probe(&self) -> Result<(), ProbeError> {
            Err(ProbeError::Unreachable("connection refused".to_string()))
        }
    }

    async fn ok_handler() -> &'static str {
        "OK"
    }

    fn gated_router(probe: Arc<dyn HealthProbePort>) -> Router {
        Router::new()
            .route("/resource", get(ok_handler))
            .layer(axum::middleware::from_fn_with_state(probe, health_gate))
    }

    #[tokio::test]
    async fn test_gate_admits_when_probe_passes() {
        let app = gated_router(Arc::new(AlwaysUp));
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/resource")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_gate_short_circuits_when_probe_fails() {
        let app = gated_router(Arc::new(AlwaysDown));
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/resource")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_error_logging_passes_responses_through() {
        let app = Router::new()
            .route("/ok", get(ok_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/ok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
