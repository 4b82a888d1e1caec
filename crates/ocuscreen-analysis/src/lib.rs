//! ocuscreen-analysis
//!
//! The result step: choose the video to analyze, run the risk analysis, and
//! attach the tier's guidance. The analyzer is a placeholder that draws a
//! random result; its request/response shape is provisional.

pub mod advice;
pub mod error;
pub mod features;
pub mod input;
pub mod mock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ocuscreen_core::models::risk::RiskResult;

pub use advice::{Guidance, guidance};
pub use mock::MockAnalyzer;

/// The rendered outcome of an analysis: the result plus its guidance.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisReport {
    pub result: RiskResult,
    pub guidance: Guidance,
    pub osdi_score: Option<f64>,
}

impl AnalysisReport {
    pub fn new(result: RiskResult, osdi_score: Option<f64>) -> Self {
        Self {
            guidance: guidance(result.tier),
            result,
            osdi_score,
        }
    }
}
