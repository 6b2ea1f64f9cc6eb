use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use service_core::error::AppError;

use crate::AppState;

/// Layer in front of every admin route. Extracts the bearer token and asks
/// the access gate whether a live session backs it: missing token is 401,
/// dead or unknown session is 403.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    state.gate.authorize_admin(token).await?;

    Ok(next.run(request).await)
}
