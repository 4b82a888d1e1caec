use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use ocuscreen_core::models::artifact::VideoArtifact;
use ocuscreen_core::models::risk::{RiskResult, RiskTier};

use crate::error::AnalysisError;
use crate::input::ensure_video;

/// Simulated processing time of the placeholder analyzer.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Stand-in for the prediction service.
///
/// Waits a fixed delay, then draws the tier uniformly from
/// {low, medium, high} and the confidence uniformly from [0, 1).
/// The call cannot be cancelled once started.
pub struct MockAnalyzer {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl MockAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A reproducible analyzer for tests.
    pub fn seeded(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub async fn analyze(&self, video: &VideoArtifact) -> Result<RiskResult, AnalysisError> {
        ensure_video(video)?;
        info!(
            bytes = video.len(),
            mime_type = %video.mime_type,
            delay_ms = self.delay.as_millis() as u64,
            "analyzing video"
        );

        tokio::time::sleep(self.delay).await;

        let result = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            RiskResult {
                tier: RiskTier::ALL[rng.gen_range(0..RiskTier::ALL.len())],
                confidence: rng.gen_range(0.0..1.0),
            }
        };

        info!(tier = %result.tier, confidence = result.confidence, "analysis complete");
        Ok(result)
    }
}
