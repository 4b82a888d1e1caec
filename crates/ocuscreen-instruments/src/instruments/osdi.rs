use ocuscreen_core::models::answers::AnswerSet;

use crate::error::InstrumentError;
use crate::scoring::{OsdiScore, Question, ResponseOption, Section, Severity, normalized_score};
use crate::Instrument;

/// OSDI: Ocular Surface Disease Index.
/// 12 frequency-rated items across ocular symptoms, vision-related function,
/// and environmental triggers. Unanswered items are excluded from the mean.
pub struct Osdi;

fn section(id: &str, name: &str, prompt: &str, questions: &[(u8, &str)]) -> Section {
    Section {
        id: id.to_string(),
        name: name.to_string(),
        prompt: prompt.to_string(),
        questions: questions
            .iter()
            .map(|&(id, text)| Question {
                id,
                text: text.to_string(),
            })
            .collect(),
    }
}

impl Instrument for Osdi {
    fn id(&self) -> &str {
        "osdi"
    }

    fn name(&self) -> &str {
        "OSDI"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                section(
                    "ocular_symptoms",
                    "Ocular Symptoms",
                    "Have you experienced any of the following during the last week?",
                    &[
                        (1, "Eyes that are sensitive to light"),
                        (2, "Eyes that feel gritty"),
                        (3, "Painful or sore eyes"),
                        (4, "Blurred vision"),
                        (5, "Poor vision"),
                    ],
                ),
                section(
                    "vision_function",
                    "Vision-Related Function",
                    "Have problems with your eyes limited you in performing any of \
                     the following during the last week?",
                    &[
                        (6, "Reading"),
                        (7, "Driving at night"),
                        (8, "Working with a computer or bank machine (ATM)"),
                        (9, "Watching TV"),
                    ],
                ),
                section(
                    "environmental_triggers",
                    "Environmental Triggers",
                    "Have your eyes felt uncomfortable in any of the following \
                     situations during the last week?",
                    &[
                        (10, "Windy conditions"),
                        (11, "Places or areas with low humidity (very dry)"),
                        (12, "Areas that are air conditioned"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn options(&self) -> &[ResponseOption] {
        static OPTIONS: std::sync::LazyLock<Vec<ResponseOption>> = std::sync::LazyLock::new(|| {
            [
                "None of the time",
                "Some of the time",
                "Half of the time",
                "Most of the time",
                "All of the time",
            ]
            .iter()
            .enumerate()
            .map(|(value, label)| ResponseOption {
                value: value as u8,
                label: label.to_string(),
            })
            .collect()
        });
        &OPTIONS
    }

    fn score(&self, answers: &AnswerSet) -> Result<OsdiScore, InstrumentError> {
        if answers.is_empty() {
            return Err(InstrumentError::NoAnswers);
        }
        if let Some(error) = self.validate_answers(answers).into_iter().next() {
            return Err(error.into());
        }

        let sum: u32 = answers.values().map(|a| u32::from(a.value())).sum();
        let score = normalized_score(sum, answers.len()).ok_or(InstrumentError::NoAnswers)?;

        Ok(OsdiScore {
            score,
            answered: answers.len(),
            severity: Severity::from_score(score),
        })
    }
}
