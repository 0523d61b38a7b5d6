//! Adapter implementations for the vibration port.

pub mod memory;

use crate::config::ShimConfig;
use crate::platform::{domain::Capability, services::BackendRegistry};
use crate::vibration::ports::VibrationBackend;

/// Builds the vibration candidates for the current build target.
///
/// No supported target exposes a vibration motor, so the registry is empty.
#[must_use]
pub fn system_registry(_config: &ShimConfig) -> BackendRegistry<dyn VibrationBackend> {
    BackendRegistry::new(Capability::Vibration)
}
