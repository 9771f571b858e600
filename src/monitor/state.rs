use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Session;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MonitorStatus {
    Inactive,
    Active,
}

impl Default for MonitorStatus {
    fn default() -> Self {
        MonitorStatus::Inactive
    }
}

/// Two-state session machine.
///
/// Inactive -> Active opens a session and mints its token; Active ->
/// Inactive closes it. At most one session exists at a time, and the token
/// is exposed for observability only.
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    status: MonitorStatus,
    session: Option<Session>,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> MonitorStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == MonitorStatus::Active
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.id.as_str())
    }

    /// Inactive -> Active. Returns the opened session, or `None` if a
    /// session is already running (no transition takes place).
    pub fn begin(&mut self, now: DateTime<Utc>) -> Option<&Session> {
        if self.is_active() {
            return None;
        }
        self.status = MonitorStatus::Active;
        self.session = Some(Session::begin(now));
        self.session.as_ref()
    }

    /// Active -> Inactive. Returns the closed session, if any.
    pub fn end(&mut self) -> Option<Session> {
        self.status = MonitorStatus::Inactive;
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn begin_opens_exactly_one_session() {
        let mut state = MonitorState::new();
        assert_eq!(state.status(), MonitorStatus::Inactive);
        assert!(state.session_id().is_none());

        let session = state.begin(at(8)).unwrap().clone();
        assert!(state.is_active());
        assert_eq!(state.session_id(), Some(session.id.as_str()));

        // Second begin does not replace the running session.
        assert!(state.begin(at(9)).is_none());
        assert_eq!(state.session_id(), Some(session.id.as_str()));
    }

    #[test]
    fn end_clears_the_token() {
        let mut state = MonitorState::new();
        state.begin(at(8));

        let closed = state.end().unwrap();
        assert!(closed.id.starts_with("SESSION_"));
        assert!(!state.is_active());
        assert!(state.session_id().is_none());

        // Ending while inactive is a no-op.
        assert!(state.end().is_none());
    }
}
