//! Adapter implementations for the radio backend port.

pub mod memory;
#[cfg(target_os = "linux")]
pub mod rfkill;

use crate::config::ShimConfig;
use crate::platform::{domain::Capability, services::BackendRegistry};
use crate::radio::ports::RadioBackend;

/// Builds the radio backend candidates for the current build target.
///
/// Linux hosts use the rfkill sysfs interface.
#[cfg(target_os = "linux")]
#[must_use]
pub fn system_registry(config: &ShimConfig) -> BackendRegistry<dyn RadioBackend> {
    BackendRegistry::<dyn RadioBackend>::new(Capability::Radio).with_candidate(
        std::sync::Arc::new(rfkill::RfkillRadioBackend::from_config(config)),
    )
}

/// Builds the radio backend candidates for the current build target.
///
/// No radio backend ships for this target, so the catalogue reports no
/// radios.
#[cfg(not(target_os = "linux"))]
#[must_use]
pub fn system_registry(_config: &ShimConfig) -> BackendRegistry<dyn RadioBackend> {
    BackendRegistry::new(Capability::Radio)
}
