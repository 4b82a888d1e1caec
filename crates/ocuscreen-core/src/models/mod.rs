pub mod answers;
pub mod artifact;
pub mod notice;
pub mod recording;
pub mod risk;
pub mod story;
pub mod submission;
pub mod user;
