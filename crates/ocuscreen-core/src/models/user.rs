use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The authenticated caller, passed explicitly to every handler that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserIdentity {
    pub id: String,
    pub email: Option<String>,
}
