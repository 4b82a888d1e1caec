//! ocuscreen-instruments
//!
//! Symptom questionnaire definitions. Pure data, no AWS dependency.
//! Defines the questions, response scale, and scoring rules for each
//! supported instrument.

pub mod error;
pub mod instruments;
pub mod scoring;

use ocuscreen_core::models::answers::AnswerSet;

use error::InstrumentError;
use scoring::{OsdiScore, Question, ResponseOption, Section, ValidationError};

/// Trait implemented by each symptom questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "osdi").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "OSDI").
    fn name(&self) -> &str;

    /// The sections and questions this instrument asks.
    fn sections(&self) -> &[Section];

    /// The response scale shared by every question.
    fn options(&self) -> &[ResponseOption];

    /// Compute the normalized score for a non-empty answer set.
    fn score(&self, answers: &AnswerSet) -> Result<OsdiScore, InstrumentError>;

    fn questions(&self) -> Vec<&Question> {
        self.sections().iter().flat_map(|s| &s.questions).collect()
    }

    /// Validate an answer set against this instrument's questions and scale.
    fn validate_answers(&self, answers: &AnswerSet) -> Vec<ValidationError> {
        let questions = self.questions();
        let max = self.options().iter().map(|o| o.value).max().unwrap_or(0);

        let mut errors = Vec::new();
        for (&question_id, &answer) in answers {
            if !questions.iter().any(|q| q.id == question_id) {
                errors.push(ValidationError {
                    question_id,
                    value: answer.value(),
                    message: format!("{}: unknown question {question_id}", self.name()),
                });
            } else if answer.value() > max {
                errors.push(ValidationError {
                    question_id,
                    value: answer.value(),
                    message: format!(
                        "{}: answer {} to question {question_id} is outside [0, {max}]",
                        self.name(),
                        answer.value(),
                    ),
                });
            }
        }
        errors
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::osdi::Osdi)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
