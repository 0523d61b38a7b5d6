//! Vibration motor port.

use crate::platform::ports::CapabilityBackend;
use crate::vibration::domain::VibrationDuration;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for vibration backend operations.
pub type VibrationBackendResult<T> = Result<T, VibrationBackendError>;

/// Host vibration motor.
#[async_trait]
pub trait VibrationBackend: CapabilityBackend {
    /// Starts vibrating for `duration`, replacing any running vibration.
    async fn vibrate(&self, duration: VibrationDuration) -> VibrationBackendResult<()>;

    /// Stops any running vibration.
    async fn cancel(&self) -> VibrationBackendResult<()>;
}

/// Errors returned by vibration adapters.
#[derive(Debug, Clone, Error)]
pub enum VibrationBackendError {
    /// Generic backend failure.
    #[error("vibration backend runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl VibrationBackendError {
    /// Wraps a runtime error from the backend adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
