//! Tests for request parsing, error bodies and the fallback routes

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{message, server};
use grubdash::prelude::*;
use serde_json::Value;

// =============================================================================
// Error type
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_invalid_request_returns_400() {
        let err = ApiError::invalid("Dish must include a name");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_REQUEST");
    }

    #[test]
    fn test_not_found_returns_404() {
        let err = ApiError::not_found("Order id not found: 1");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_internal_returns_500() {
        let err = ApiError::Internal("store lock poisoned".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_response().message, "Internal error: store lock poisoned");
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = ApiError::invalid("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

// =============================================================================
// HTTP surface
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_400() {
    let server = server();
    let response = server
        .post("/dishes")
        .text("{ not json")
        .content_type("application/json")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_REQUEST");
    assert!(message(&body).starts_with("Invalid JSON"));
}

#[tokio::test]
async fn test_empty_body_reports_first_missing_field() {
    let server = server();
    let response = server.post("/orders").expect_failure().await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(message(&body), "Order must include a deliverTo");
}

#[tokio::test]
async fn test_non_string_text_field_is_400() {
    let server = server();
    let response = server
        .post("/dishes")
        .json(&serde_json::json!({
            "data": { "name": 42, "description": "d", "price": 6, "image_url": "u" }
        }))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(message(&body), "Dish name must be a string");
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let server = server();
    let response = server.get("/menus/1").expect_failure().await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(message(&body), "Path not found: /menus/1");
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = server();
    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "grubdash");
    }
}
