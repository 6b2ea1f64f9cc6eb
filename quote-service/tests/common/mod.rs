//! Test helpers for quote-service integration tests.
//!
//! Everything runs against the in-memory store; no external services.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use quote_service::{
    AppState, build_router,
    config::{
        Environment, QuoteConfig, RateLimitConfig, SecurityConfig, StoreConfig, SwaggerConfig,
        SwaggerMode,
    },
    store::MemoryStore,
};
use tower::util::ServiceExt;

pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password-123";

pub fn test_config() -> QuoteConfig {
    QuoteConfig {
        common: service_core::config::Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        environment: Environment::Dev,
        service_name: "quote-service-test".to_string(),
        service_version: "0.0.0".to_string(),
        log_level: "error".to_string(),
        store: StoreConfig {
            redis_url: "redis://localhost:6379".to_string(),
            seed_defaults: false,
        },
        security: SecurityConfig {
            allowed_origins: vec!["*".to_string()],
            admin_password: TEST_ADMIN_PASSWORD.to_string(),
            session_ttl_minutes: 10,
        },
        swagger: SwaggerConfig {
            enabled: SwaggerMode::Disabled,
        },
        rate_limit: RateLimitConfig {
            login_attempts: 1000,
            login_window_seconds: 60,
            submit_attempts: 1000,
            submit_window_seconds: 60,
        },
    }
}

pub fn test_state() -> AppState {
    AppState::new(test_config(), Arc::new(MemoryStore::new()))
}

/// A router plus the state behind it, so tests can reach the services and
/// the raw store directly.
pub fn test_app() -> (Router, AppState) {
    let state = test_state();
    (build_router(state.clone()), state)
}

pub async fn send_get(app: &Router, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn send_delete(app: &Router, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in with the test password and hand back a live session token.
pub async fn login_token(app: &Router) -> String {
    let response = send_json(
        app,
        "POST",
        "/api/admin/login",
        serde_json::json!({ "password": TEST_ADMIN_PASSWORD }),
        None,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    body_json(response).await["token"].as_str().unwrap().to_string()
}
