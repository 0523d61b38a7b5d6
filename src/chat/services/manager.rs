//! Compose delegation with composer fallback.

use super::{ChatServiceError, ChatServiceResult};
use crate::chat::{
    domain::{ChatMessage, ComposeSmsRequest},
    ports::{SmsComposer, SmsComposerError},
};
use crate::platform::{domain::PlatformTarget, services::BackendRegistry};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Delegates SMS composition to the host.
///
/// Holds the available composers in preference order. Dispatch goes to the
/// first one; a composer that reports itself unavailable at dispatch time
/// hands over to the next.
#[derive(Clone)]
pub struct ChatMessageManager {
    composers: Vec<Arc<dyn SmsComposer>>,
}

impl ChatMessageManager {
    /// Creates a manager over available composers in preference order.
    #[must_use]
    pub const fn new(composers: Vec<Arc<dyn SmsComposer>>) -> Self {
        Self { composers }
    }

    /// Creates a manager over every available candidate of a registry.
    #[must_use]
    pub fn from_registry(registry: &BackendRegistry<dyn SmsComposer>) -> Self {
        Self::new(registry.resolve_all().to_vec())
    }

    /// Reports whether any composer is available.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !self.composers.is_empty()
    }

    /// Returns the name of the preferred composer, if any.
    #[must_use]
    pub fn backend_name(&self) -> Option<&'static str> {
        self.composers
            .first()
            .map(|composer| composer.backend_name())
    }

    /// Shows the host's compose UI prefilled with `message`.
    ///
    /// Recipients are joined with `;` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ChatServiceError::PlatformNotSupported`] when no composer is
    /// available or every composer reported itself unavailable at dispatch,
    /// [`ChatServiceError::Domain`] when the message has no recipients and the
    /// composer requires one, and [`ChatServiceError::Composer`] when a
    /// composer rejected the request.
    pub async fn show_compose_sms(&self, message: &ChatMessage) -> ChatServiceResult<()> {
        let mut last_unavailable = None;
        for composer in &self.composers {
            let request = ComposeSmsRequest::from_message(message, composer.requires_recipient())?;
            match composer.compose(&request).await {
                Ok(()) => {
                    info!(
                        composer = composer.backend_name(),
                        recipients = message.recipients().len(),
                        "compose request delegated"
                    );
                    return Ok(());
                }
                Err(err @ SmsComposerError::Unavailable(_)) => {
                    warn!(
                        composer = composer.backend_name(),
                        error = %err,
                        "composer unavailable; trying fallback"
                    );
                    last_unavailable = Some(err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        if let Some(err) = last_unavailable {
            warn!(error = %err, "every SMS composer was unavailable");
        }
        Err(ChatServiceError::PlatformNotSupported(PlatformTarget::current()))
    }

    /// Opens the host's messaging settings without waiting for the result.
    ///
    /// Failures are logged, never reported. Nothing happens outside a tokio
    /// runtime.
    pub fn show_sms_settings(&self) {
        if self.composers.is_empty() {
            warn!("no SMS composer available; messaging settings not opened");
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("no async runtime; messaging settings not opened");
            return;
        };

        let composers = self.composers.clone();
        drop(runtime.spawn(async move {
            for composer in composers {
                match composer.open_settings().await {
                    Ok(()) => {
                        debug!(composer = composer.backend_name(), "messaging settings opened");
                        return;
                    }
                    Err(err) => {
                        warn!(
                            composer = composer.backend_name(),
                            error = %err,
                            "failed to open messaging settings"
                        );
                    }
                }
            }
        }));
    }
}

impl fmt::Debug for ChatMessageManager {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&'static str> = self
            .composers
            .iter()
            .map(|composer| composer.backend_name())
            .collect();
        formatter
            .debug_struct("ChatMessageManager")
            .field("composers", &names)
            .finish()
    }
}
