//! REST router assembly
//!
//! Combines the resource routes from the [`EntityRegistry`] with health
//! checks, a JSON 404 fallback and request tracing.

use super::entity_registry::EntityRegistry;
use crate::core::error::ApiError;
use axum::{Json, Router, http::Uri, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// - `GET /health`, `GET /healthz`
/// - every registered entity's routes
/// - `custom_routes`, merged last
/// - any other path answers 404 `Path not found: <path>`
pub fn build_router(registry: &EntityRegistry, custom_routes: Vec<Router>) -> Router {
    let app = custom_routes
        .into_iter()
        .fold(health_routes().merge(registry.build_routes()), |app, routes| {
            app.merge(routes)
        });

    app.fallback(path_not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "grubdash"
    }))
}

async fn path_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Path not found: {}", uri.path()))
}
