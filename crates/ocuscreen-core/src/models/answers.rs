use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Highest ordinal on the five-point response scale.
pub const MAX_ORDINAL: u8 = 4;

/// A single Likert response, 0 ("none of the time") to 4 ("all of the time").
///
/// Deserializes from either a JSON number or a numeric string, since clients
/// commonly submit radio-button values as strings (`{"1": "4"}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "AnswerRepr", into = "u8")]
pub struct Likert(u8);

impl Likert {
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > MAX_ORDINAL {
            return Err(CoreError::InvalidAnswer(format!(
                "{value} is outside 0..={MAX_ORDINAL}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Likert> for u8 {
    fn from(likert: Likert) -> Self {
        likert.0
    }
}

impl fmt::Display for Likert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerRepr {
    Number(u8),
    Text(String),
}

impl TryFrom<AnswerRepr> for Likert {
    type Error = CoreError;

    fn try_from(repr: AnswerRepr) -> Result<Self, Self::Error> {
        match repr {
            AnswerRepr::Number(n) => Likert::new(n),
            AnswerRepr::Text(s) => {
                let n = s
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| CoreError::InvalidAnswer(format!("'{s}' is not an ordinal")))?;
                Likert::new(n)
            }
        }
    }
}

/// Question id → selected response. One answer per question.
pub type AnswerSet = BTreeMap<u8, Likert>;
