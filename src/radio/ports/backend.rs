//! Radio backend port.

use crate::platform::ports::CapabilityBackend;
use crate::radio::domain::{RadioAccessStatus, RadioId, RadioRecord, RadioState};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for radio backend operations.
pub type RadioBackendResult<T> = Result<T, RadioBackendError>;

/// Platform radio subsystem contract.
#[async_trait]
pub trait RadioBackend: CapabilityBackend {
    /// Lists every radio the backend can address, of any kind.
    async fn list_radios(&self) -> RadioBackendResult<Vec<RadioRecord>>;

    /// Reads the current state of a radio.
    ///
    /// Backends that can switch a radio but cannot read it back return
    /// [`RadioState::Unknown`].
    async fn radio_state(&self, radio_id: &RadioId) -> RadioBackendResult<RadioState>;

    /// Switches a radio on or off.
    ///
    /// Returns [`RadioAccessStatus::Unspecified`] when the platform accepts
    /// the request without confirming it.
    async fn set_radio_state(
        &self,
        radio_id: &RadioId,
        state: RadioState,
    ) -> RadioBackendResult<RadioAccessStatus>;

    /// Requests permission to control radios.
    async fn request_access(&self) -> RadioAccessStatus;

    /// Returns a backend-specific filter string for external enumeration APIs.
    fn device_selector(&self) -> String;
}

/// Errors returned by radio backend adapters.
#[derive(Debug, Clone, Error)]
pub enum RadioBackendError {
    /// No radio with the identifier exists.
    #[error("radio {0} not found")]
    NotFound(RadioId),

    /// The platform refused the operation.
    #[error("access to radio {0} denied by the system")]
    AccessDenied(RadioId),

    /// Generic backend failure.
    #[error("radio backend runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl RadioBackendError {
    /// Wraps a runtime error from the backend adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
