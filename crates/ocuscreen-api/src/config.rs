use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use ocuscreen_analysis::mock::DEFAULT_DELAY;
use ocuscreen_capture::session::DEFAULT_TOTAL_SECS;

use crate::state::DEFAULT_SESSION_TTL;

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_BUCKET: &str = "ocuscreen";
const DEFAULT_AUDIENCE: &str = "authenticated";
const DEFAULT_MAX_UPLOAD_MB: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Memory,
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: SocketAddr,
    pub storage: StorageBackend,
    pub bucket: String,
    pub region: Option<String>,
    pub jwt_secret: String,
    /// `None` disables the audience check.
    pub jwt_audience: Option<String>,
    pub analysis_delay: Duration,
    pub recording_secs: u32,
    pub max_upload_bytes: usize,
    /// Idle time after which a session that is not recording is dropped.
    pub session_ttl: Duration,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind = var("OCUSCREEN_BIND")
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse()
            .map_err(|e| eyre::eyre!("OCUSCREEN_BIND: {e}"))?;

        let storage = match var("OCUSCREEN_STORAGE").as_deref() {
            None | Some("memory") => StorageBackend::Memory,
            Some("s3") => StorageBackend::S3,
            Some(other) => eyre::bail!("OCUSCREEN_STORAGE must be `s3` or `memory`, got `{other}`"),
        };

        let jwt_secret =
            var("OCUSCREEN_JWT_SECRET").ok_or_else(|| eyre::eyre!("OCUSCREEN_JWT_SECRET is required"))?;

        let jwt_audience = match var("OCUSCREEN_JWT_AUDIENCE").as_deref() {
            Some("none") => None,
            Some(aud) => Some(aud.to_string()),
            None => Some(DEFAULT_AUDIENCE.to_string()),
        };

        let analysis_delay = match var("OCUSCREEN_ANALYSIS_DELAY_MS") {
            Some(ms) => Duration::from_millis(
                ms.parse()
                    .map_err(|e| eyre::eyre!("OCUSCREEN_ANALYSIS_DELAY_MS: {e}"))?,
            ),
            None => DEFAULT_DELAY,
        };

        let recording_secs = match var("OCUSCREEN_RECORDING_SECS") {
            Some(secs) => secs
                .parse::<u32>()
                .map_err(|e| eyre::eyre!("OCUSCREEN_RECORDING_SECS: {e}"))?
                .max(1),
            None => DEFAULT_TOTAL_SECS,
        };

        let max_upload_mb = match var("OCUSCREEN_MAX_UPLOAD_MB") {
            Some(mb) => mb
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("OCUSCREEN_MAX_UPLOAD_MB: {e}"))?,
            None => DEFAULT_MAX_UPLOAD_MB,
        };

        let session_ttl = match var("OCUSCREEN_SESSION_TTL_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse::<u64>()
                    .map_err(|e| eyre::eyre!("OCUSCREEN_SESSION_TTL_SECS: {e}"))?
                    .max(1),
            ),
            None => DEFAULT_SESSION_TTL,
        };

        Ok(Self {
            bind,
            storage,
            bucket: var("OCUSCREEN_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            region: var("AWS_REGION"),
            jwt_secret,
            jwt_audience,
            analysis_delay,
            recording_secs,
            max_upload_bytes: max_upload_mb.saturating_mul(1024 * 1024),
            session_ttl,
        })
    }
}
