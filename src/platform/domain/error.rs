//! Error taxonomy shared by every capability adapter.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of a capability failure as seen by callers.
///
/// Backend-native errors never cross the adapter boundary as-is; every public
/// error type in this crate maps onto one of these kinds through a `kind()`
/// accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityErrorKind {
    /// No backend able to perform the operation exists for this build and OS.
    PlatformNotSupported,
    /// A backend exists but could not complete the request this time.
    Unavailable,
    /// The caller supplied an out-of-contract value.
    InvalidArgument,
    /// The caller broke a usage protocol, such as an unbalanced release.
    Misuse,
}

impl CapabilityErrorKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlatformNotSupported => "platform_not_supported",
            Self::Unavailable => "unavailable",
            Self::InvalidArgument => "invalid_argument",
            Self::Misuse => "misuse",
        }
    }
}

impl fmt::Display for CapabilityErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned while parsing a capability name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown capability: {0}")]
pub struct ParseCapabilityError(pub String);
