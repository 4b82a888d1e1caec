//! ocuscreen-api library root.
//!
//! The router is built here so integration tests can drive it directly;
//! `main.rs` only wires configuration and the runtime.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/questionnaire", get(routes::questionnaire::get_questionnaire))
        .route("/stories", get(routes::stories::list_stories))
        .route("/stories/{id}", get(routes::stories::get_story))
        .route("/analysis/features", post(routes::analysis::extract_features));

    let protected = Router::new()
        .route(
            "/questionnaire/submissions",
            post(routes::questionnaire::submit_answers).get(routes::questionnaire::list_submissions),
        )
        .route("/sessions", post(routes::sessions::create_session))
        .route(
            "/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route("/sessions/{id}/start", post(routes::sessions::start_session))
        .route("/sessions/{id}/chunks", put(routes::sessions::push_chunk))
        .route("/sessions/{id}/stop", post(routes::sessions::stop_session))
        .route("/sessions/{id}/video", get(routes::sessions::download_video))
        .route("/sessions/{id}/submit", post(routes::sessions::submit_session))
        .route("/analysis", post(routes::analysis::analyze))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let max_upload_bytes = state.max_upload_bytes;
    public
        .merge(protected)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
