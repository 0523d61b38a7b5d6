//! SMS composer port.

use crate::chat::domain::ComposeSmsRequest;
use crate::platform::ports::CapabilityBackend;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for composer operations.
pub type SmsComposerResult<T> = Result<T, SmsComposerError>;

/// Host facility that presents a prepared SMS to the user.
#[async_trait]
pub trait SmsComposer: CapabilityBackend {
    /// Reports whether compose requests must name at least one recipient.
    fn requires_recipient(&self) -> bool;

    /// Presents the compose UI for a request.
    ///
    /// Returns [`SmsComposerError::Unavailable`] when the composer cannot be
    /// used right now, which lets callers fall back to another composer.
    async fn compose(&self, request: &ComposeSmsRequest) -> SmsComposerResult<()>;

    /// Opens the host's messaging settings.
    async fn open_settings(&self) -> SmsComposerResult<()>;
}

/// Errors returned by composer adapters.
#[derive(Debug, Clone, Error)]
pub enum SmsComposerError {
    /// The composer cannot serve requests at the moment.
    #[error("composer unavailable: {0}")]
    Unavailable(String),

    /// The composer received the request and refused it.
    #[error("composer rejected the request: {0}")]
    Rejected(String),

    /// Generic composer failure.
    #[error("composer runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl SmsComposerError {
    /// Wraps a runtime error from the composer adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
