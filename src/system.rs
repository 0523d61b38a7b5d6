//! Host-wide capability wiring.

use crate::chat::{self, services::ChatMessageManager};
use crate::config::{ConfigError, ShimConfig};
use crate::display::services::{DisplayRequest, DisplayRequestCoordinator};
use crate::network::{self, services::NetworkInformation};
use crate::platform::domain::{BackendResolution, Capability, CapabilityReport, PlatformTarget};
use crate::radio::{self, services::RadioCatalog};
use crate::vibration::{self, services::VibrationDevice};
use std::sync::Arc;
use tracing::info;

/// Every public capability, each bound to the backend resolved for this host.
#[derive(Debug, Clone)]
pub struct SystemServices {
    radios: RadioCatalog,
    chat: ChatMessageManager,
    display: Arc<DisplayRequestCoordinator>,
    vibration: VibrationDevice,
    network: NetworkInformation,
    report: CapabilityReport,
}

impl SystemServices {
    /// Bundles already-built capabilities.
    #[must_use]
    pub fn new(
        radios: RadioCatalog,
        chat: ChatMessageManager,
        display: Arc<DisplayRequestCoordinator>,
        vibration: VibrationDevice,
        network: NetworkInformation,
    ) -> Self {
        let report = CapabilityReport::new(PlatformTarget::current())
            .with_entry(Capability::Radio, resolution_of(radios.backend_name()))
            .with_entry(Capability::ChatMessaging, resolution_of(chat.backend_name()))
            .with_entry(Capability::DisplayRequest, resolution_of(display.backend_name()))
            .with_entry(Capability::Vibration, resolution_of(vibration.backend_name()))
            .with_entry(
                Capability::NetworkInformation,
                resolution_of(network.backend_name()),
            );
        Self {
            radios,
            chat,
            display,
            vibration,
            network,
            report,
        }
    }

    /// Registers the default backends for the build target and resolves
    /// each capability.
    ///
    /// The display coordinator is process-wide: if it was already
    /// initialised, that instance is reused and `config` does not affect it.
    #[must_use]
    pub fn from_config(config: &ShimConfig) -> Self {
        let services = Self::new(
            RadioCatalog::from_registry(&radio::adapters::system_registry(config)),
            ChatMessageManager::from_registry(&chat::adapters::system_registry(config)),
            DisplayRequestCoordinator::global_or_init(config),
            VibrationDevice::from_registry(&vibration::adapters::system_registry(config)),
            NetworkInformation::from_registry(&network::adapters::system_registry(config)),
        );
        for entry in services.report.entries() {
            info!(
                capability = %entry.capability,
                backend = entry.resolution.backend().unwrap_or("none"),
                "capability resolved"
            );
        }
        services
    }

    /// Loads configuration from the environment and resolves every
    /// capability.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configured file cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::from_config(&ShimConfig::from_env()?))
    }

    /// Returns the radio catalogue.
    #[must_use]
    pub const fn radios(&self) -> &RadioCatalog {
        &self.radios
    }

    /// Returns the SMS compose manager.
    #[must_use]
    pub const fn chat(&self) -> &ChatMessageManager {
        &self.chat
    }

    /// Returns the display request coordinator.
    #[must_use]
    pub const fn display(&self) -> &Arc<DisplayRequestCoordinator> {
        &self.display
    }

    /// Creates a display request token bound to this host's coordinator.
    #[must_use]
    pub fn display_request(&self) -> DisplayRequest {
        DisplayRequest::with_coordinator(Arc::clone(&self.display))
    }

    /// Returns the vibration device.
    #[must_use]
    pub const fn vibration(&self) -> &VibrationDevice {
        &self.vibration
    }

    /// Returns the network information view.
    #[must_use]
    pub const fn network(&self) -> &NetworkInformation {
        &self.network
    }

    /// Returns which backend serves each capability.
    #[must_use]
    pub const fn report(&self) -> &CapabilityReport {
        &self.report
    }
}

fn resolution_of(backend: Option<&'static str>) -> BackendResolution {
    backend.map_or(BackendResolution::Unavailable, |name| {
        BackendResolution::Resolved { backend: name }
    })
}
