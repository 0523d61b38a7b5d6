//! Caller-held display request token.

use super::{DisplayRequestCoordinator, DisplayRequestError, DisplayRequestResult};
use crate::config::ShimConfig;
use crate::display::domain::DisplayDomainError;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Token asking for the display to stay on.
///
/// Each token tracks its own outstanding requests, so it can only release
/// what it requested. Dropping a token releases whatever it still holds.
#[derive(Debug)]
pub struct DisplayRequest<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    coordinator: Arc<DisplayRequestCoordinator<C>>,
    outstanding: Mutex<u32>,
}

impl DisplayRequest {
    /// Creates a token bound to the process-wide coordinator.
    ///
    /// The coordinator is initialised with default configuration if nothing
    /// initialised it earlier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_coordinator(DisplayRequestCoordinator::global_or_init(
            &ShimConfig::default(),
        ))
    }
}

impl Default for DisplayRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> DisplayRequest<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a token bound to a specific coordinator.
    #[must_use]
    pub const fn with_coordinator(coordinator: Arc<DisplayRequestCoordinator<C>>) -> Self {
        Self {
            coordinator,
            outstanding: Mutex::new(0),
        }
    }

    /// Returns the coordinator this token reports to.
    #[must_use]
    pub const fn coordinator(&self) -> &Arc<DisplayRequestCoordinator<C>> {
        &self.coordinator
    }

    /// Asks for the display to stay on.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayRequestError`] when no backend is available or the
    /// backend cannot be enabled; the token's count is then unchanged.
    pub fn request_active(&self) -> DisplayRequestResult<()> {
        let mut outstanding = self
            .outstanding
            .lock()
            .map_err(|_| DisplayRequestError::StatePoisoned)?;
        let next = outstanding
            .checked_add(1)
            .ok_or(DisplayDomainError::CounterOverflow)?;
        self.coordinator.acquire()?;
        *outstanding = next;
        Ok(())
    }

    /// Withdraws one earlier request from this token.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayRequestError::ReleaseWithoutRequest`] when this token
    /// has nothing outstanding, and backend errors from disabling. A disable
    /// failure still counts as a release.
    pub fn request_release(&self) -> DisplayRequestResult<()> {
        let mut outstanding = self
            .outstanding
            .lock()
            .map_err(|_| DisplayRequestError::StatePoisoned)?;
        let Some(next) = outstanding.checked_sub(1) else {
            return Err(DisplayRequestError::ReleaseWithoutRequest);
        };
        let released = self.coordinator.release();
        if matches!(released, Ok(_) | Err(DisplayRequestError::Backend(_))) {
            *outstanding = next;
        }
        released.map(|_| ())
    }

    /// Returns how many requests this token holds.
    #[must_use]
    pub fn outstanding_requests(&self) -> u32 {
        self.outstanding.lock().map_or(0, |outstanding| *outstanding)
    }
}

impl<C> Drop for DisplayRequest<C>
where
    C: Clock + Send + Sync,
{
    fn drop(&mut self) {
        let held = match self.outstanding.get_mut() {
            Ok(outstanding) => std::mem::take(outstanding),
            Err(poisoned) => std::mem::take(poisoned.into_inner()),
        };
        for _ in 0..held {
            if let Err(err) = self.coordinator.release() {
                warn!(error = %err, "failed to release display request on drop");
            }
        }
    }
}
