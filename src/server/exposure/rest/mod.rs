//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` with the resource
//! routes, health checks, a JSON 404 fallback and request tracing.

use super::super::host::ServerHost;
use crate::core::error::ApiError;
use anyhow::Result;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - Company and invoice routes
    /// - Custom routes
    /// - A fallback answering unknown paths, and known paths hit with an
    ///   unsupported method, with the uniform 404 body
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        tracing::debug!(entities = ?host.entity_types(), "Building REST router");

        let health_routes = Self::health_routes();
        let entity_routes = host.entity_registry.build_routes();

        let mut app = health_routes.merge(entity_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        // Only reaches method routers registered above
        Ok(app
            .method_not_allowed_fallback(Self::not_found)
            .fallback(Self::not_found)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "biztime"
        }))
    }

    async fn not_found() -> ApiError {
        ApiError::not_found("Not Found")
    }
}
