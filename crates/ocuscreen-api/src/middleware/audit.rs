use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use ocuscreen_core::models::user::UserIdentity;

/// Audit logging middleware.
///
/// Logs every API request as a structured event. The caller id is present
/// only when the auth layer ran before the response was produced.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let user = response
        .extensions()
        .get::<UserIdentity>()
        .map(|u| u.id.clone());
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        user = user.as_deref(),
        "api_request"
    );

    response
}
