//! Adapter implementations for the network status port.

pub mod memory;
#[cfg(target_os = "linux")]
pub mod sysfs;

use crate::config::ShimConfig;
use crate::network::ports::NetworkStatusBackend;
use crate::platform::{domain::Capability, services::BackendRegistry};

/// Builds the network status candidates for the current build target.
///
/// Linux hosts read interface state from sysfs and routes from procfs.
#[cfg(target_os = "linux")]
#[must_use]
pub fn system_registry(config: &ShimConfig) -> BackendRegistry<dyn NetworkStatusBackend> {
    BackendRegistry::<dyn NetworkStatusBackend>::new(Capability::NetworkInformation)
        .with_candidate(std::sync::Arc::new(sysfs::SysfsNetworkBackend::from_config(
            config,
        )))
}

/// Builds the network status candidates for the current build target.
///
/// No network backend ships for this target.
#[cfg(not(target_os = "linux"))]
#[must_use]
pub fn system_registry(_config: &ShimConfig) -> BackendRegistry<dyn NetworkStatusBackend> {
    BackendRegistry::new(Capability::NetworkInformation)
}
