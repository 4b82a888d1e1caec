use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ocuscreen_core::models::answers::AnswerSet;
use ocuscreen_core::models::notice::Notice;
use ocuscreen_core::models::submission::OsdiSubmission;
use ocuscreen_core::models::user::UserIdentity;
use ocuscreen_instruments::Instrument;
use ocuscreen_instruments::error::InstrumentError;
use ocuscreen_instruments::instruments::osdi::Osdi;
use ocuscreen_instruments::scoring::{ResponseOption, Section, Severity};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuestionnaireDefinition {
    id: String,
    name: String,
    sections: Vec<Section>,
    options: Vec<ResponseOption>,
}

pub async fn get_questionnaire() -> Json<QuestionnaireDefinition> {
    let osdi = Osdi;
    Json(QuestionnaireDefinition {
        id: osdi.id().to_string(),
        name: osdi.name().to_string(),
        sections: osdi.sections().to_vec(),
        options: osdi.options().to_vec(),
    })
}

#[derive(Deserialize)]
pub struct SubmitAnswers {
    answers: AnswerSet,
}

#[derive(Serialize)]
pub struct SubmissionResponse {
    score: f64,
    severity: Severity,
    severity_label: &'static str,
    answered: usize,
    submission_id: Option<Uuid>,
    notices: Vec<Notice>,
}

/// Score an answer set and record it.
///
/// A failed insert does not fail the request: the score is still returned,
/// with a warning notice.
pub async fn submit_answers(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    payload: Result<Json<SubmitAnswers>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let Json(SubmitAnswers { answers }) = payload?;

    let osdi = Osdi;
    let errors = osdi.validate_answers(&answers);
    if let Some(first) = errors.into_iter().next() {
        return Err(InstrumentError::Validation(first).into());
    }
    let result = osdi.score(&answers)?;

    let submission = OsdiSubmission::new(&user.id, result.score, answers);
    let mut notices = Vec::new();
    let submission_id = match state.store.insert_osdi(&submission).await {
        Ok(_) => {
            notices.push(Notice::info("Questionnaire saved."));
            Some(submission.id)
        }
        Err(e) => {
            tracing::warn!(user = %user.id, error = %e, "failed to save OSDI submission");
            notices.push(Notice::warning(format!(
                "Your score was calculated but could not be saved: {e}"
            )));
            None
        }
    };

    tracing::info!(
        user = %user.id,
        score = result.score,
        severity = %result.severity,
        answered = result.answered,
        "OSDI scored"
    );

    Ok(Json(SubmissionResponse {
        score: result.score,
        severity: result.severity,
        severity_label: result.severity.label(),
        answered: result.answered,
        submission_id,
        notices,
    }))
}

pub async fn list_submissions(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> Result<Json<Vec<OsdiSubmission>>, ApiError> {
    Ok(Json(state.store.list_osdi(&user.id).await?))
}
