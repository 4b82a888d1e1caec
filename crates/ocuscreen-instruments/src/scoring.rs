use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// One option on the response scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u8,
    pub text: String,
}

/// A group of related questions within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub questions: Vec<Question>,
}

/// OSDI severity classification of a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Map a score in [0, 100] onto the ordered partition
    /// `[0,13) normal, [13,23) mild, [23,33) moderate, [33,100] severe`.
    pub fn from_score(score: f64) -> Self {
        if score < 13.0 {
            Self::Normal
        } else if score < 23.0 {
            Self::Mild
        } else if score < 33.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Mild => "Mild Dry Eye",
            Self::Moderate => "Moderate Dry Eye",
            Self::Severe => "Severe Dry Eye",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed questionnaire score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OsdiScore {
    /// Normalized score in [0, 100], rounded to two decimals.
    pub score: f64,
    pub answered: usize,
    pub severity: Severity,
}

/// `sum × 25 / count`, i.e. `100 × mean / 4`, rounded to two decimals.
///
/// Returns `None` when `count` is zero.
pub fn normalized_score(sum: u32, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let raw = f64::from(sum) * 25.0 / count as f64;
    Some(round2(raw))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: u8,
    pub value: u8,
    pub message: String,
}
