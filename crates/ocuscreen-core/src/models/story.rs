use serde::Serialize;

/// A reading passage shown while the user records. Immutable catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}
