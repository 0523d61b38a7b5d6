//! Snapshot of the coordinator state.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Point-in-time view of display keep-awake state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRequestStatus {
    /// Number of outstanding requests.
    pub active_requests: u32,
    /// When the current activation began, if active.
    pub active_since: Option<DateTime<Utc>>,
    /// Backend driving keep-awake, if any.
    pub backend: Option<&'static str>,
}

impl DisplayRequestStatus {
    /// Reports whether the display is being kept awake.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active_requests > 0
    }
}
