//! Validated vibration duration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Validation errors for vibration durations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum VibrationDomainError {
    /// The duration is negative.
    #[error("vibration duration {0} ms is negative")]
    Negative(i64),

    /// The duration exceeds [`VibrationDuration::MAX_MILLIS`].
    #[error("vibration duration {0} ms exceeds {max} ms", max = VibrationDuration::MAX_MILLIS)]
    TooLong(i64),
}

/// Vibration span in `[0, MAX_MILLIS]` milliseconds, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct VibrationDuration(u16);

impl VibrationDuration {
    /// Longest accepted vibration in milliseconds.
    pub const MAX_MILLIS: i64 = 5_000;

    /// The longest accepted vibration.
    pub const MAX: Self = Self(5_000);

    /// Validates a duration in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`VibrationDomainError`] for values below zero or above
    /// [`Self::MAX_MILLIS`].
    pub fn from_millis(millis: i64) -> Result<Self, VibrationDomainError> {
        if millis < 0 {
            return Err(VibrationDomainError::Negative(millis));
        }
        u16::try_from(millis)
            .ok()
            .filter(|value| i64::from(*value) <= Self::MAX_MILLIS)
            .map(Self)
            .ok_or(VibrationDomainError::TooLong(millis))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u16 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl TryFrom<i64> for VibrationDuration {
    type Error = VibrationDomainError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl TryFrom<Duration> for VibrationDuration {
    type Error = VibrationDomainError;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        Self::from_millis(millis)
    }
}

impl From<VibrationDuration> for i64 {
    fn from(duration: VibrationDuration) -> Self {
        Self::from(duration.0)
    }
}
