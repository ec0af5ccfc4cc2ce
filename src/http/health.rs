use super::state::HttpServerState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub datasets: usize,
}

/// Liveness check
///
/// Checks if the service is running.
/// This endpoint always returns 200 OK if the server is able to respond.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn liveness() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}

/// Readiness check
///
/// Ready once datasets are loaded. The registry never changes after startup.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "No dataset loaded", body = ReadinessResponse)
    )
)]
pub async fn readiness(State(state): State<HttpServerState>) -> impl IntoResponse {
    let datasets = state.registry.len();
    if datasets == 0 {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "not_ready".to_string(),
                datasets,
            }),
        );
    }
    (
        StatusCode::OK,
        Json(ReadinessResponse {
            status: "ready".to_string(),
            datasets,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DatasetRegistry;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_liveness() {
        let response = liveness().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_without_datasets() {
        let state = HttpServerState {
            name: Arc::new("test".to_string()),
            registry: Arc::new(DatasetRegistry::default()),
        };
        let response = readiness(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_readiness_response_serialization() {
        let response = ReadinessResponse {
            status: "ready".to_string(),
            datasets: 3,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"ready","datasets":3}"#);
    }
}
