use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;

use crate::{
    dtos::quote::{AddQuoteRequest, RandomQuoteResponse},
    services::ServiceError,
    utils::ValidatedJson,
    AppState,
};

/// Serve one random quote
#[utoipa::path(
    get,
    path = "/api/reply",
    responses(
        (status = 200, description = "A random quote, or a placeholder when none exist", body = RandomQuoteResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Quotes"
)]
pub async fn random_reply(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let response = match state.quotes.random().await.map_err(AppError::from)? {
        Some((quote, total)) => RandomQuoteResponse::from_quote(quote, total),
        None => RandomQuoteResponse::empty_wall(),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Submit a quote
///
/// While any invitation key exists, a valid `key` must accompany the
/// submission and one use of it is spent - even if the quote is then
/// rejected as a duplicate.
#[utoipa::path(
    post,
    path = "/api/add",
    request_body = AddQuoteRequest,
    responses(
        (status = 201, description = "Quote stored", body = Quote),
        (status = 400, description = "Missing or invalid invitation key", body = ErrorResponse),
        (status = 409, description = "Identical quote already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Quotes"
)]
pub async fn add_quote(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AddQuoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .gate
        .authorize_public_write(req.key.as_deref())
        .await
        .map_err(AppError::from)?;

    if state
        .dedup
        .is_duplicate(&req.message, &req.author)
        .await
        .map_err(AppError::from)?
    {
        return Err(ServiceError::DuplicateContent.into());
    }

    let quote = state
        .quotes
        .create(&req.message, &req.author)
        .await
        .map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json(quote)))
}
