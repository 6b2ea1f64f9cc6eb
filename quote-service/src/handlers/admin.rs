use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use service_core::error::AppError;

use crate::{
    AppState,
    dtos::{
        admin::{CreateKeyRequest, KeyInfo, KeyListResponse, LoginRequest, LoginResponse},
        quote::{QuoteListResponse, UpdateQuoteRequest},
    },
    utils::ValidatedJson,
};

/// Log in as administrator
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session created", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = state
        .sessions
        .login(&req.password)
        .await
        .map_err(AppError::from)?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token: session.token,
            expires: session.expires,
        }),
    ))
}

/// Issue an invitation key
#[utoipa::path(
    post,
    path = "/api/admin/keys",
    request_body = CreateKeyRequest,
    responses(
        (status = 201, description = "Key issued", body = KeyInfo),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired session", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn create_key(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateKeyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let key = state
        .keys
        .issue(req.max_uses.unwrap_or(1))
        .await
        .map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(KeyInfo::from(key))))
}

/// List invitation keys
#[utoipa::path(
    get,
    path = "/api/admin/keys",
    responses(
        (status = 200, description = "Current key inventory", body = KeyListResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired session", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn list_keys(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let keys: Vec<KeyInfo> = state
        .keys
        .list()
        .await
        .map_err(AppError::from)?
        .into_iter()
        .map(KeyInfo::from)
        .collect();

    Ok((
        StatusCode::OK,
        Json(KeyListResponse {
            total: keys.len(),
            keys,
        }),
    ))
}

/// Revoke an invitation key
#[utoipa::path(
    delete,
    path = "/api/admin/keys/{key}",
    params(("key" = String, Path, description = "The key to revoke")),
    responses(
        (status = 200, description = "Key removed (or was already gone)"),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired session", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn revoke_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.keys.revoke(&key).await.map_err(AppError::from)?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Key revoked" })),
    ))
}

/// List all quotes
#[utoipa::path(
    get,
    path = "/api/admin/quotes",
    responses(
        (status = 200, description = "Every stored quote", body = QuoteListResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired session", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn list_quotes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let quotes = state.quotes.list_all().await.map_err(AppError::from)?;

    Ok((
        StatusCode::OK,
        Json(QuoteListResponse {
            total: quotes.len(),
            quotes,
        }),
    ))
}

/// Edit a quote
#[utoipa::path(
    put,
    path = "/api/admin/quotes/{id}",
    params(("id" = String, Path, description = "Quote id")),
    request_body = UpdateQuoteRequest,
    responses(
        (status = 200, description = "Record overwritten", body = Quote),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired session", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn update_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateQuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quote = state
        .quotes
        .update(&id, &req.message, &req.author)
        .await
        .map_err(AppError::from)?;

    Ok((StatusCode::OK, Json(quote)))
}

/// Delete a quote
#[utoipa::path(
    delete,
    path = "/api/admin/quotes/{id}",
    params(("id" = String, Path, description = "Quote id")),
    responses(
        (status = 200, description = "Record removed (or was already gone)"),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired session", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.quotes.delete(&id).await.map_err(AppError::from)?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Quote deleted" })),
    ))
}
