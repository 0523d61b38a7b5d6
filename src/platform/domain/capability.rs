//! Capability domains exposed by the shim.

use super::ParseCapabilityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete device or platform feature exposed through one stable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Device radio enumeration and control.
    Radio,
    /// SMS compose and messaging settings navigation.
    ChatMessaging,
    /// Keep-the-display-awake requests.
    DisplayRequest,
    /// Vibration motor control.
    Vibration,
    /// Network connectivity queries.
    NetworkInformation,
}

impl Capability {
    /// All capability domains in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Radio,
        Self::ChatMessaging,
        Self::DisplayRequest,
        Self::Vibration,
        Self::NetworkInformation,
    ];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::ChatMessaging => "chat_messaging",
            Self::DisplayRequest => "display_request",
            Self::Vibration => "vibration",
            Self::NetworkInformation => "network_information",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Capability {
    type Error = ParseCapabilityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|capability| capability.as_str() == normalized)
            .ok_or_else(|| ParseCapabilityError(value.to_owned()))
    }
}
