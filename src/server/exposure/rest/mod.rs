//! REST exposure: health check routes next to the GraphQL endpoint

use super::super::host::ServerHost;
use anyhow::Result;
use axum::{Json, Router, extract::Extension, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with the health check routes and any custom routes
    /// merged in.
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes(host);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app)
    }

    /// Build health check routes
    fn health_routes(host: Arc<ServerHost>) -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .layer(Extension(host))
    }

    /// Health check endpoint handler
    async fn health_check(Extension(host): Extension<Arc<ServerHost>>) -> Json<Value> {
        Json(json!({
            "status": if host.is_ready() { "ok" } else { "degraded" },
            "service": "bookshelf"
        }))
    }
}
