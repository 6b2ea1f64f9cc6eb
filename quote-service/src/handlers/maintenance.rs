use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use service_core::error::AppError;

use crate::{dtos::quote::DedupResponse, AppState};

/// Remove duplicate quotes
///
/// Idempotent maintenance action; also runs automatically at startup.
#[utoipa::path(
    post,
    path = "/api/dedup",
    responses(
        (status = 200, description = "Sweep finished", body = DedupResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Maintenance"
)]
pub async fn dedup(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let deleted = state
        .dedup
        .remove_duplicates()
        .await
        .map_err(AppError::from)?;

    Ok((StatusCode::OK, Json(DedupResponse { deleted })))
}
