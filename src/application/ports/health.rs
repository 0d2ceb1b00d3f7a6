//! Health Probe Port
//!
//! Every service gates resource requests behind a lightweight liveness
//! probe of its backing dependency. The same probe feeds `GET /health`.

use async_trait::async_trait;
use thiserror::Error;

/// Probe failure. Carries the driver-level message for the log line; the
/// HTTP layer never exposes it to clients.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("dependency unreachable: {0}")]
    Unreachable(String),
}

/// Health Probe Port.
#[async_trait]
pub trait HealthProbePort: Send + Sync {
    /// Key under which the dependency appears in the health envelope
    /// ("mysql", "mongodb", "firebase").
    fn dependency_name(&self) -> &'static str;

    /// Cheap connectivity check against the backing dependency.
    async fn probe(&self) -> Result<(), ProbeError>;
}
