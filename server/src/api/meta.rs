use crate::AppState;
use axum::routing::get;
use axum::{response::IntoResponse, Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Returns the router for service metadata endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/", get(root))
        .route("/api/health", get(health_check))
}

#[derive(OpenApi)]
#[openapi(
    paths(root, health_check),
    components(schemas(RootResponse, HealthResponse))
)]
pub struct ApiDoc;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[utoipa::path(
    get,
    path = "/api/",
    tag = "meta",
    responses(
        (status = 200, description = "Service greeting", body = RootResponse)
    )
)]
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: "ShelfChef API - Ready to cook!".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "meta",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "ShelfChef API".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_payload() {
        let response = root().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["message"], "ShelfChef API - Ready to cook!");
    }

    #[tokio::test]
    async fn test_health_payload() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "ShelfChef API");
    }
}
