//! Adapter implementations for the keep-awake port.

pub mod command;
pub mod memory;

use crate::config::ShimConfig;
use crate::display::ports::KeepAwakeBackend;
use crate::platform::{domain::Capability, services::BackendRegistry};
use std::sync::Arc;

/// Builds the keep-awake candidates for the current build target.
#[must_use]
pub fn system_registry(config: &ShimConfig) -> BackendRegistry<dyn KeepAwakeBackend> {
    BackendRegistry::<dyn KeepAwakeBackend>::new(Capability::DisplayRequest)
        .with_candidate(Arc::new(command::CommandKeepAwake::from_config(&config.keep_awake)))
}
