pub mod analysis;
pub mod health;
pub mod questionnaire;
pub mod sessions;
pub mod stories;
