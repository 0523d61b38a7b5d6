//! Service-level errors for radio operations.

use crate::platform::domain::{CapabilityErrorKind, PlatformTarget};
use crate::radio::{domain::RadioDomainError, ports::RadioBackendError};
use thiserror::Error;

/// Service-level errors for radio catalogue and handle operations.
#[derive(Debug, Error)]
pub enum RadioServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] RadioDomainError),

    /// The backend could not complete the request.
    #[error(transparent)]
    Backend(#[from] RadioBackendError),

    /// No radio backend is available for this build and host.
    #[error("no radio backend is available on {0}")]
    PlatformNotSupported(PlatformTarget),
}

impl RadioServiceError {
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

/// Result type for radio service operations.
pub type RadioServiceResult<T> = Result<T, RadioServiceError>;
