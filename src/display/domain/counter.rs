//! Activation counter with edge detection.

use super::DisplayDomainError;
use serde::{Deserialize, Serialize};

/// Effect of a counter change on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// The count went from zero to one; the backend must be enabled.
    Activated,
    /// The count went from one to zero; the backend must be disabled.
    Deactivated,
    /// The count changed without crossing zero.
    Held,
}

impl Transition {
    /// Reports whether the change crosses zero.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        !matches!(self, Self::Held)
    }
}

/// Count of outstanding display requests. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationCounter {
    active: u32,
}

impl ActivationCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: 0 }
    }

    /// Returns the number of outstanding requests.
    #[must_use]
    pub const fn active(self) -> u32 {
        self.active
    }

    /// Reports whether at least one request is outstanding.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active > 0
    }

    /// Records one more request.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayDomainError::CounterOverflow`] at `u32::MAX`.
    pub const fn increment(&mut self) -> Result<Transition, DisplayDomainError> {
        let Some(next) = self.active.checked_add(1) else {
            return Err(DisplayDomainError::CounterOverflow);
        };
        self.active = next;
        if next == 1 {
            Ok(Transition::Activated)
        } else {
            Ok(Transition::Held)
        }
    }

    /// Records one release.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayDomainError::CounterUnderflow`] at zero; the counter
    /// is left unchanged.
    pub const fn decrement(&mut self) -> Result<Transition, DisplayDomainError> {
        let Some(next) = self.active.checked_sub(1) else {
            return Err(DisplayDomainError::CounterUnderflow);
        };
        self.active = next;
        if next == 0 {
            Ok(Transition::Deactivated)
        } else {
            Ok(Transition::Held)
        }
    }
}
