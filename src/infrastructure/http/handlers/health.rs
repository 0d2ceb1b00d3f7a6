//! Health Handler
//!
//! `GET /health` reports the live probe outcome; it is deliberately routed
//! outside the health gate so a broken dependency is still observable.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::infrastructure::http::state::ServiceState;

/// Health envelope. The dependency appears under its own key
/// ("mysql" / "mongodb" / "firebase") with a "Connected"/"Disconnected"
/// value, flattened next to the fixed fields.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    #[serde(flatten)]
    pub dependency: Map<String, Value>,
    pub timestamp: String,
}

pub async fn health<S: ServiceState>(
    State(state): State<Arc<S>>,
) -> (StatusCode, Json<HealthResponse>) {
    let probe = state.health_probe();

    let (status_code, status, connection) = match probe.probe().await {
        Ok(()) => (StatusCode::OK, "OK", "Connected"),
        Err(e) => {
            tracing::error!(
                dependency = probe.dependency_name(),
                error = %e,
                "Health probe failed"
            );
            (StatusCode::SERVICE_UNAVAILABLE, "ERROR", "Disconnected")
        }
    };

    let mut dependency = Map::new();
    dependency.insert(
        probe.dependency_name().to_string(),
        Value::String(connection.to_string()),
    );

    (
        status_code,
        Json(HealthResponse {
            status,
            service: state.service_name(),
            dependency,
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}
