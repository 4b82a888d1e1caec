use std::env;

use tracing_subscriber::EnvFilter;

use ocuscreen_analysis::MockAnalyzer;
use ocuscreen_api::config::{ApiConfig, StorageBackend};
use ocuscreen_api::router;
use ocuscreen_api::state::AppState;
use ocuscreen_auth::jwt::TokenVerifier;
use ocuscreen_capture::SessionConfig;
use ocuscreen_storage::client;
use ocuscreen_storage::records::RecordStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    let store = match config.storage {
        StorageBackend::S3 => {
            let s3 = match config.region.as_deref() {
                Some(region) => client::build_client_with_region(region).await,
                None => client::build_client().await,
            };
            RecordStore::s3(s3, config.bucket.clone())
        }
        StorageBackend::Memory => RecordStore::memory(),
    };

    let state = AppState::new(
        store,
        MockAnalyzer::new(config.analysis_delay),
        TokenVerifier::new(config.jwt_secret.as_bytes(), config.jwt_audience.clone()),
        SessionConfig::default().with_total_secs(config.recording_secs),
        config.max_upload_bytes,
    )
    .with_session_ttl(config.session_ttl);
    state.spawn_session_sweeper();

    tracing::info!(
        storage = state.store.backend(),
        recording_secs = config.recording_secs,
        analysis_delay_ms = config.analysis_delay.as_millis() as u64,
        session_ttl_secs = config.session_ttl.as_secs(),
        "starting ocuscreen api"
    );

    let app = router(state);

    if env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
