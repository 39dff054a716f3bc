//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Json, Router, middleware, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// The application as served: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

/// Wraps [`create_router`] so `/product/` and `/product` reach the same route.
///
/// Path normalization has to run before routing, so it wraps the router
/// from the outside instead of being added with `Router::layer`.
pub fn create_app(state: AppState) -> App {
    NormalizePath::trim_trailing_slash(create_router(state))
}

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Compression and CORS wrap everything
/// 2. Request ID middleware generates/propagates request IDs
/// 3. Logging middleware logs requests with those IDs
///
/// # Routes
/// - `/product` - Product catalog operations
/// - `/health`, `/health/ready`, `/health/live` - Health checks
/// - `/api-docs/openapi.json` - OpenAPI document
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/product", handlers::products::product_routes())
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .route(OPENAPI_PATH, get(move || async move { Json(api) }))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::middleware::REQUEST_ID_HEADER;
    use crate::repositories::InMemoryProductStore;
    use crate::state::test_support::state_with_store;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> App {
        create_app(state_with_store(Arc::new(InMemoryProductStore::new())))
    }

    async fn get_response(uri: &str) -> axum::response::Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_openapi_document_lists_product_routes() {
        let response = get_response(OPENAPI_PATH).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/product/{id}"));
        assert!(paths.contains_key("/product/bycat/{id}"));
        assert!(paths.contains_key("/health"));
    }

    #[tokio::test]
    async fn test_liveness_probe_and_request_id() {
        let response = get_response("/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_health_reports_unreachable_database() {
        let response = get_response("/health").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["checks"]["database"]["status"], "unhealthy");

        let ready = get_response("/health/ready").await;
        assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_trailing_slash_reaches_same_route() {
        assert_eq!(get_response("/health/live/").await.status(), StatusCode::OK);
        assert_eq!(get_response("/product/").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = get_response("/api/users").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
