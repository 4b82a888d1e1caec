use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use ocuscreen_core::models::story::Story;
use ocuscreen_core::stories;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct StorySummary {
    id: &'static str,
    title: &'static str,
    description: &'static str,
}

pub async fn list_stories() -> Json<Vec<StorySummary>> {
    Json(
        stories::catalog()
            .iter()
            .map(|s| StorySummary {
                id: s.id,
                title: s.title,
                description: s.description,
            })
            .collect(),
    )
}

pub async fn get_story(Path(id): Path<String>) -> Result<Json<Story>, ApiError> {
    Ok(Json(*stories::require_story(&id)?))
}
