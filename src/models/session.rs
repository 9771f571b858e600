//! Monitoring session model.
//!
//! A session is a logical grouping token for one contiguous period of
//! active monitoring. It is purely observational: emitted records do not
//! carry the token, so sessions cannot be recovered from history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Open a session with a token derived from the activation time.
    pub fn begin(now: DateTime<Utc>) -> Self {
        Self {
            id: format!("SESSION_{}", now.timestamp_millis()),
            started_at: now,
        }
    }
}
