//! Radio kind, state and access status enumerations.

use super::{ParseRadioKindError, ParseRadioStateError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadioKind {
    /// Any radio without a more specific category.
    Other,
    /// Wi-Fi radio.
    WiFi,
    /// Cellular data radio.
    MobileBroadband,
    /// Bluetooth radio.
    Bluetooth,
    /// FM receiver.
    Fm,
}

impl RadioKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Other => "other",
            Self::WiFi => "wifi",
            Self::MobileBroadband => "mobile_broadband",
            Self::Bluetooth => "bluetooth",
            Self::Fm => "fm",
        }
    }
}

impl fmt::Display for RadioKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RadioKind {
    type Error = ParseRadioKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "other" => Ok(Self::Other),
            "wifi" => Ok(Self::WiFi),
            "mobile_broadband" => Ok(Self::MobileBroadband),
            "bluetooth" => Ok(Self::Bluetooth),
            "fm" => Ok(Self::Fm),
            _ => Err(ParseRadioKindError(value.to_owned())),
        }
    }
}

/// Power state of a radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadioState {
    /// The state could not be determined.
    Unknown,
    /// The radio is powered on.
    On,
    /// The radio is powered off and can be turned on by software.
    Off,
    /// The radio is disabled by hardware or policy and cannot be turned on.
    Disabled,
}

impl RadioState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::On => "on",
            Self::Off => "off",
            Self::Disabled => "disabled",
        }
    }

    /// Returns whether callers may request this state.
    #[must_use]
    pub const fn is_settable(self) -> bool {
        matches!(self, Self::On | Self::Off)
    }
}

impl fmt::Display for RadioState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RadioState {
    type Error = ParseRadioStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "unknown" => Ok(Self::Unknown),
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "disabled" => Ok(Self::Disabled),
            _ => Err(ParseRadioStateError(value.to_owned())),
        }
    }
}

/// Outcome of an access request or state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadioAccessStatus {
    /// The backend gave no explicit success or failure signal.
    Unspecified,
    /// Access was granted or the change was applied.
    Allowed,
    /// The user declined access.
    DeniedByUser,
    /// The system refused access.
    DeniedBySystem,
}

impl RadioAccessStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Allowed => "allowed",
            Self::DeniedByUser => "denied_by_user",
            Self::DeniedBySystem => "denied_by_system",
        }
    }
}

impl fmt::Display for RadioAccessStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
