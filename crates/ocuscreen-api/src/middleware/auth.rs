use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT validation middleware.
///
/// Validates `Authorization: Bearer <token>` against the shared secret and
/// inserts the caller's [`UserIdentity`](ocuscreen_core::models::user::UserIdentity)
/// into request extensions for handlers to use.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let user = state.verifier.identify(header).inspect_err(|e| {
        tracing::debug!(error = %e, "rejected request without a valid token");
    })?;

    req.extensions_mut().insert(user.clone());

    let mut response = next.run(req).await;
    // Lets the audit layer attribute the request.
    response.extensions_mut().insert(user);
    Ok(response)
}
