//! Handle over one physical radio.

use super::RadioServiceResult;
use crate::radio::{
    domain::{
        RadioAccessStatus, RadioDescriptor, RadioDomainError, RadioId, RadioKind, RadioState,
    },
    ports::{RadioBackend, RadioBackendError},
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Owned handle over one radio.
///
/// Handles are only produced by [`RadioCatalog`](super::RadioCatalog) from a
/// validated descriptor, so the backend reference is always present. The
/// reference is released when the handle is dropped.
pub struct Radio {
    descriptor: RadioDescriptor,
    backend: Arc<dyn RadioBackend>,
}

impl Radio {
    pub(super) const fn new(
        descriptor: RadioDescriptor,
        backend: Arc<dyn RadioBackend>,
    ) -> Self {
        Self {
            descriptor,
            backend,
        }
    }

    /// Returns the radio identifier.
    #[must_use]
    pub const fn id(&self) -> &RadioId {
        self.descriptor.id()
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Returns the radio category.
    #[must_use]
    pub const fn kind(&self) -> RadioKind {
        self.descriptor.kind()
    }

    /// Returns the validated descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &RadioDescriptor {
        &self.descriptor
    }

    /// Returns the name of the backend serving this radio.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    /// Reads the current radio state.
    ///
    /// Never fails: backend errors are logged and reported as
    /// [`RadioState::Unknown`].
    pub async fn state(&self) -> RadioState {
        match self.backend.radio_state(self.id()).await {
            Ok(state) => state,
            Err(err) => {
                warn!(radio = %self.id(), error = %err, "radio state query failed");
                RadioState::Unknown
            }
        }
    }

    /// Requests that the radio be switched on or off.
    ///
    /// Completes with [`RadioAccessStatus::Allowed`] when the change was
    /// applied, [`RadioAccessStatus::DeniedBySystem`] when the platform
    /// refused it, and [`RadioAccessStatus::Unspecified`] when the platform
    /// gave no signal either way.
    ///
    /// # Errors
    ///
    /// Returns [`RadioDomainError::UnsettableState`] (before any backend call)
    /// for states other than `On` and `Off`, and backend errors for failures
    /// that are not a refusal.
    pub async fn set_state(&self, state: RadioState) -> RadioServiceResult<RadioAccessStatus> {
        if !state.is_settable() {
            return Err(RadioDomainError::UnsettableState(state).into());
        }

        match self.backend.set_radio_state(self.id(), state).await {
            Ok(status) => {
                debug!(radio = %self.id(), %state, %status, "radio state change completed");
                Ok(status)
            }
            Err(RadioBackendError::AccessDenied(radio_id)) => {
                warn!(radio = %radio_id, %state, "radio state change denied by the system");
                Ok(RadioAccessStatus::DeniedBySystem)
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl fmt::Debug for Radio {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Radio")
            .field("descriptor", &self.descriptor)
            .field("backend", &self.backend.backend_name())
            .finish()
    }
}
