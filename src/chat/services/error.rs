//! Service-level errors for chat operations.

use crate::chat::{domain::ChatDomainError, ports::SmsComposerError};
use crate::platform::domain::{CapabilityErrorKind, PlatformTarget};
use thiserror::Error;

/// Service-level errors for compose delegation.
#[derive(Debug, Error)]
pub enum ChatServiceError {
    /// The message cannot be marshalled for the selected composer.
    #[error(transparent)]
    Domain(#[from] ChatDomainError),

    /// A composer rejected the request or failed while dispatching it.
    #[error(transparent)]
    Composer(#[from] SmsComposerError),

    /// No composer is available for this build and host, or every
    /// composer reported itself unavailable at dispatch.
    #[error("no SMS composer is available on {0}")]
    PlatformNotSupported(PlatformTarget),
}

impl ChatServiceError {
    /// Classifies the error for callers.
    #[must_use]
    pub const fn kind(&self) -> CapabilityErrorKind {
        match self {
            Self::Domain(_) => CapabilityErrorKind::InvalidArgument,
            Self::Composer(_) => CapabilityErrorKind::Unavailable,
            Self::PlatformNotSupported(_) => CapabilityErrorKind::PlatformNotSupported,
        }
    }
}

/// Result type for chat service operations.
pub type ChatServiceResult<T> = Result<T, ChatServiceError>;
