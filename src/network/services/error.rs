//! Service-level errors for network queries.

use crate::network::ports::NetworkBackendError;
use crate::platform::domain::{CapabilityErrorKind, PlatformTarget};
use thiserror::Error;

/// Errors returned by network information queries.
#[derive(Debug, Error)]
pub enum NetworkServiceError {
    /// The backend could not read network state.
    #[error(transparent)]
    Backend(#[from] NetworkBackendError),

    /// No network backend is available for this build and host.
    #[error("no network backend is available on {0}")]
    PlatformNotSupported(PlatformTarget),
}

impl NetworkServiceError {
    /// Classifies the error for callers.
    #[must_use]
    pub const fn kind(&self) -> CapabilityErrorKind {
        match self {
            Self::Backend(_) => CapabilityErrorKind::Unavailable,
            Self::PlatformNotSupported(_) => CapabilityErrorKind::PlatformNotSupported,
        }
    }
}

/// Result type for network information queries.
pub type NetworkServiceResult<T> = Result<T, NetworkServiceError>;
