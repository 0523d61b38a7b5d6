//! Adapter implementations for the chat ports.

pub mod launcher;
pub mod memory;
pub mod uri;

use crate::config::ShimConfig;
use crate::chat::ports::SmsComposer;
use crate::platform::{domain::Capability, services::BackendRegistry};
use std::sync::Arc;

/// Builds the composer candidates for the current build target.
///
/// Desktop targets open an `sms:` URI in the host's registered handler,
/// first through the default opener and then through the alternate one.
#[must_use]
pub fn system_registry(config: &ShimConfig) -> BackendRegistry<dyn SmsComposer> {
    BackendRegistry::<dyn SmsComposer>::new(Capability::ChatMessaging)
        .with_candidate(Arc::new(uri::UriSmsComposer::from_config(&config.launcher)))
        .with_candidate(Arc::new(uri::UriSmsComposer::fallback_from_config(&config.launcher)))
}
