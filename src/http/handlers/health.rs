//! Health check handler.

use aide::transform::TransformOperation;
use axum::Json;

use crate::http::types::HealthStatus;

/// Health check endpoint.
///
/// There are no dependencies to probe, so the service always reports healthy.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy".to_string() })
}

pub(crate) fn health_check_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that every call reports healthy.
    #[tokio::test]
    async fn test_health_check() {
        for _ in 0..3 {
            let Json(health) = health_check().await;
            assert_eq!(health.status, "healthy");
        }
    }
}
