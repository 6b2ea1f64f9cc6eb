mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::*;
use quote_service::models::AdminSession;
use quote_service::store::KeyValueStore;

#[tokio::test]
async fn admin_routes_reject_missing_token() {
    let (app, _) = test_app();

    let response = send_get(&app, "/api/admin/quotes", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send_get(&app, "/api/admin/keys", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_routes_reject_unknown_token() {
    let (app, _) = test_app();

    let response = send_get(&app, "/api/admin/quotes", Some("not-a-session")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let (app, _) = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/admin/login",
        serde_json::json!({ "password": "wrong" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_with_empty_password_fails_validation() {
    let (app, _) = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/admin/login",
        serde_json::json!({ "password": "" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn fresh_session_grants_admin_access() {
    let (app, _) = test_app();

    let token = login_token(&app).await;
    let response = send_get(&app, "/api/admin/quotes", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn expired_session_is_forbidden_and_swept() {
    let (app, state) = test_app();

    // plant a session that expired a minute ago
    let stale = AdminSession {
        token: "stale-token".to_string(),
        expires: Utc::now() - Duration::minutes(1),
    };
    state
        .store
        .set("session:stale-token", &serde_json::to_string(&stale).unwrap())
        .await
        .unwrap();

    let response = send_get(&app, "/api/admin/quotes", Some("stale-token")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // the failed access deleted the record (lazy sweep)
    assert_eq!(state.store.get("session:stale-token").await.unwrap(), None);
}
