//! Session domain models.

use serde::{Deserialize, Serialize};

/// The signed-in advisor's identity record.
///
/// Written on login, cleared on logout, read once at startup. Always
/// persisted as a full-record overwrite under a fixed key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub full_name: String,
    pub biometrics_enabled: bool,
}
