//! Adapter kind and connectivity level enumerations.

use super::ParseConnectivityLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How far a connection reaches, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkConnectivityLevel {
    /// No usable link.
    None,
    /// Link up, local network only.
    LocalAccess,
    /// Internet reachable only through an intermediary such as a captive
    /// portal.
    ConstrainedInternetAccess,
    /// Full internet access.
    InternetAccess,
}

impl NetworkConnectivityLevel {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::LocalAccess => "local_access",
            Self::ConstrainedInternetAccess => "constrained_internet_access",
            Self::InternetAccess => "internet_access",
        }
    }
}

impl fmt::Display for NetworkConnectivityLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for NetworkConnectivityLevel {
    type Error = ParseConnectivityLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "none" => Ok(Self::None),
            "local_access" => Ok(Self::LocalAccess),
            "constrained_internet_access" => Ok(Self::ConstrainedInternetAccess),
            "internet_access" => Ok(Self::InternetAccess),
            _ => Err(ParseConnectivityLevelError(value.to_owned())),
        }
    }
}

/// Physical medium of a network adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkAdapterKind {
    /// Wired Ethernet.
    Ethernet,
    /// Wireless LAN.
    Wlan,
    /// Cellular data.
    Wwan,
    /// Anything else, including tunnels and bridges.
    Other,
}

impl NetworkAdapterKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ethernet => "ethernet",
            Self::Wlan => "wlan",
            Self::Wwan => "wwan",
            Self::Other => "other",
        }
    }

    /// Returns the IANA `ifType` number for the kind.
    #[must_use]
    pub const fn iana_interface_type(self) -> u32 {
        match self {
            Self::Ethernet => 6,
            Self::Wlan => 71,
            Self::Wwan => 243,
            Self::Other => 1,
        }
    }

    /// Maps an IANA `ifType` number to a kind.
    #[must_use]
    pub const fn from_iana_interface_type(if_type: u32) -> Self {
        match if_type {
            6 => Self::Ethernet,
            71 => Self::Wlan,
            243 => Self::Wwan,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for NetworkAdapterKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
