//! Storage key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of records in the Ocuscreen bucket. Records are append-only and
//! partitioned by user so a user's history is a single prefix listing.

use uuid::Uuid;

pub const OSDI_PREFIX: &str = "osdi/";

pub const RECORDINGS_PREFIX: &str = "recordings/";

pub fn osdi_submission(user_id: &str, id: Uuid) -> String {
    format!("{OSDI_PREFIX}{user_id}/{id}.json")
}

pub fn osdi_user_prefix(user_id: &str) -> String {
    format!("{OSDI_PREFIX}{user_id}/")
}

pub fn recording(user_id: &str, id: Uuid) -> String {
    format!("{RECORDINGS_PREFIX}{user_id}/{id}.json")
}

pub fn recording_user_prefix(user_id: &str) -> String {
    format!("{RECORDINGS_PREFIX}{user_id}/")
}
