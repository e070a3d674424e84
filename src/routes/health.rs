//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use crate::config::HEALTH_BODY;

/// Health check handler.
///
/// Returns the literal `OK` as `text/plain`. This is a liveness probe: it only
/// checks that the process can respond to HTTP, so it has no failure path.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
