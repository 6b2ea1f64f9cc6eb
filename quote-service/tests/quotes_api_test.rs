mod common;

use axum::http::StatusCode;
use common::*;

#[tokio::test]
async fn reply_on_empty_wall_returns_placeholder() {
    let (app, _) = test_app();

    let response = send_get(&app, "/api/reply", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total_quotes"], 0);
    assert_eq!(body["author"], "System");
}

#[tokio::test]
async fn added_quote_comes_back_from_reply() {
    let (app, _) = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/add",
        serde_json::json!({ "message": "hello", "author": "bob" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["message"], "hello");
    assert_eq!(created["author"], "bob");
    assert!(created["id"].as_str().is_some());
    assert!(created["created_at"].as_str().is_some());

    let response = send_get(&app, "/api/reply", None).await;
    let body = body_json(response).await;
    assert_eq!(body["message"], "hello");
    assert_eq!(body["author"], "bob");
    assert_eq!(body["total_quotes"], 1);
}

#[tokio::test]
async fn submission_fields_are_trimmed() {
    let (app, state) = test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/add",
        serde_json::json!({ "message": "  spaced out  ", "author": " eve " }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let all = state.quotes.list_all().await.unwrap();
    assert_eq!(all[0].message, "spaced out");
    assert_eq!(all[0].author, "eve");
}

#[tokio::test]
async fn empty_and_blank_fields_fail_validation() {
    let (app, _) = test_app();

    // empty string is caught by the DTO rules
    let response = send_json(
        &app,
        "POST",
        "/api/add",
        serde_json::json!({ "message": "", "author": "bob" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // whitespace-only survives the DTO but dies in the service
    let response = send_json(
        &app,
        "POST",
        "/api/add",
        serde_json::json!({ "message": "   ", "author": "bob" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // missing field fails json deserialization outright
    let response = send_json(
        &app,
        "POST",
        "/api/add",
        serde_json::json!({ "message": "hello" }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_submission_is_rejected() {
    let (app, _) = test_app();

    let payload = serde_json::json!({ "message": "once", "author": "bob" });
    let response = send_json(&app, "POST", "/api/add", payload.clone(), None).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send_json(&app, "POST", "/api/add", payload, None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // whitespace variants collapse to the same content
    let response = send_json(
        &app,
        "POST",
        "/api/add",
        serde_json::json!({ "message": " once ", "author": "bob " }),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn admin_can_list_update_and_delete_quotes() {
    let (app, state) = test_app();
    let token = login_token(&app).await;

    let created = state.quotes.create("original", "bob").await.unwrap();

    let response = send_get(&app, "/api/admin/quotes", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);

    // update replaces content and stamps updated_at instead of created_at
    let response = send_json(
        &app,
        "PUT",
        &format!("/api/admin/quotes/{}", created.id),
        serde_json::json!({ "message": "edited", "author": "author2" }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["message"], "edited");
    assert_eq!(updated["author"], "author2");
    assert!(updated["updated_at"].as_str().is_some());
    assert!(updated.get("created_at").is_none());

    // delete twice: both succeed
    let uri = format!("/api/admin/quotes/{}", created.id);
    let response = send_delete(&app, &uri, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send_delete(&app, &uri, Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(state.quotes.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn health_reports_store_status() {
    let (app, _) = test_app();

    let response = send_get(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"], "up");
}
