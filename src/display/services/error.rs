//! Service-level errors for display requests.

use crate::display::{domain::DisplayDomainError, ports::KeepAwakeError};
use crate::platform::domain::{CapabilityErrorKind, PlatformTarget};
use thiserror::Error;

/// Errors returned by display request operations.
#[derive(Debug, Error)]
pub enum DisplayRequestError {
    /// The activation counter rejected the change.
    #[error(transparent)]
    Domain(#[from] DisplayDomainError),

    /// The token was released more often than it was requested.
    #[error("display request released without a matching request")]
    ReleaseWithoutRequest,

    /// The keep-awake backend failed.
    #[error(transparent)]
    Backend(#[from] KeepAwakeError),

    /// No keep-awake backend is available for this build and host.
    #[error("no keep-awake backend is available on {0}")]
    PlatformNotSupported(PlatformTarget),

    /// A previous holder panicked while updating the counter.
    #[error("display request state is poisoned")]
    StatePoisoned,
}

impl DisplayRequestError {
    /// Classifies the error for callers.
    #[must_use]
    pub const fn kind(&self) -> CapabilityErrorKind {
        match self {
            Self::Domain(_) | Self::ReleaseWithoutRequest => CapabilityErrorKind::Misuse,
            Self::Backend(_) | Self::StatePoisoned => CapabilityErrorKind::Unavailable,
            Self::PlatformNotSupported(_) => CapabilityErrorKind::PlatformNotSupported,
        }
    }
}

/// Result type for display request operations.
pub type DisplayRequestResult<T> = Result<T, DisplayRequestError>;
