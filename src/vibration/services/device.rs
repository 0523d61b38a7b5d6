//! Public vibration device.

use crate::platform::{
    domain::{CapabilityErrorKind, PlatformTarget},
    services::BackendRegistry,
};
use crate::vibration::{
    domain::{VibrationDomainError, VibrationDuration},
    ports::{VibrationBackend, VibrationBackendError},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors returned by vibration operations.
#[derive(Debug, Error)]
pub enum VibrationServiceError {
    /// The requested duration is out of range.
    #[error(transparent)]
    Domain(#[from] VibrationDomainError),

    /// The motor backend failed.
    #[error(transparent)]
    Backend(#[from] VibrationBackendError),

    /// No vibration backend is available for this build and host.
    #[error("no vibration backend is available on {0}")]
    PlatformNotSupported(PlatformTarget),
}

impl VibrationServiceError {
    /// Classifies the error for callers.
    #[must_use]
    pub const fn kind(&self) -> CapabilityErrorKind {
        match self {
            Self::Domain(_) => CapabilityErrorKind::InvalidArgument,
            Self::Backend(_) => CapabilityErrorKind::Unavailable,
            Self::PlatformNotSupported(_) => CapabilityErrorKind::PlatformNotSupported,
        }
    }
}

/// Result type for vibration operations.
pub type VibrationServiceResult<T> = Result<T, VibrationServiceError>;

/// Handle over the host's vibration motor.
#[derive(Clone)]
pub struct VibrationDevice {
    backend: Option<Arc<dyn VibrationBackend>>,
}

impl VibrationDevice {
    /// Creates a device over a resolved backend, or over none.
    #[must_use]
    pub const fn new(backend: Option<Arc<dyn VibrationBackend>>) -> Self {
        Self { backend }
    }

    /// Creates a device over the preferred available backend.
    #[must_use]
    pub fn from_registry(registry: &BackendRegistry<dyn VibrationBackend>) -> Self {
        Self::new(registry.resolve())
    }

    /// Reports whether a motor backend is available.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.backend.is_some()
    }

    /// Returns the name of the backend in use, if any.
    #[must_use]
    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|backend| backend.backend_name())
    }

    /// Vibrates for `duration_ms` milliseconds.
    ///
    /// The duration is validated before the backend is consulted, so an
    /// out-of-range value is reported as such even on hosts without a motor.
    ///
    /// # Errors
    ///
    /// Returns [`VibrationServiceError::Domain`] when the duration is
    /// negative or longer than [`VibrationDuration::MAX_MILLIS`],
    /// [`VibrationServiceError::PlatformNotSupported`] with no backend, and
    /// backend failures.
    pub async fn vibrate(&self, duration_ms: i64) -> VibrationServiceResult<()> {
        let duration = VibrationDuration::from_millis(duration_ms)?;
        self.vibrate_for(duration).await
    }

    /// Vibrates for a pre-validated duration.
    ///
    /// # Errors
    ///
    /// Returns [`VibrationServiceError::PlatformNotSupported`] with no
    /// backend, and backend failures.
    pub async fn vibrate_for(&self, duration: VibrationDuration) -> VibrationServiceResult<()> {
        let backend = self.require_backend()?;
        backend.vibrate(duration).await?;
        debug!(duration_ms = duration.as_millis(), "vibration started");
        Ok(())
    }

    /// Stops any running vibration.
    ///
    /// # Errors
    ///
    /// Returns [`VibrationServiceError::PlatformNotSupported`] with no
    /// backend, and backend failures.
    pub async fn cancel(&self) -> VibrationServiceResult<()> {
        self.require_backend()?.cancel().await?;
        Ok(())
    }

    fn require_backend(&self) -> VibrationServiceResult<&Arc<dyn VibrationBackend>> {
        self.backend
            .as_ref()
            .ok_or(VibrationServiceError::PlatformNotSupported(PlatformTarget::current()))
    }
}

impl fmt::Debug for VibrationDevice {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("VibrationDevice")
            .field("backend", &self.backend_name())
            .finish()
    }
}
