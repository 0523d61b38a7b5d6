//! In-memory vibration backend.

use crate::platform::ports::CapabilityBackend;
use crate::vibration::{
    domain::VibrationDuration,
    ports::{VibrationBackend, VibrationBackendError, VibrationBackendResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Vibration backend that records requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVibrationBackend {
    state: Arc<RwLock<MotorState>>,
}

#[derive(Debug, Default)]
struct MotorState {
    history: Vec<VibrationDuration>,
    running: Option<VibrationDuration>,
    cancellations: usize,
}

impl InMemoryVibrationBackend {
    /// Creates an idle motor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every accepted vibration in order.
    #[must_use]
    pub fn history(&self) -> Vec<VibrationDuration> {
        self.state
            .read()
            .map(|state| state.history.clone())
            .unwrap_or_default()
    }

    /// Returns the vibration last started and not cancelled.
    #[must_use]
    pub fn running(&self) -> Option<VibrationDuration> {
        self.state.read().ok().and_then(|state| state.running)
    }

    /// Returns how many times the motor was cancelled.
    #[must_use]
    pub fn cancellations(&self) -> usize {
        self.state.read().map_or(0, |state| state.cancellations)
    }

    fn update(&self, apply: impl FnOnce(&mut MotorState)) -> VibrationBackendResult<()> {
        let mut state = self.state.write().map_err(|err| {
            VibrationBackendError::runtime(std::io::Error::other(err.to_string()))
        })?;
        apply(&mut state);
        Ok(())
    }
}

impl CapabilityBackend for InMemoryVibrationBackend {
    fn backend_name(&self) -> &'static str {
        "in-memory-vibration"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[async_trait]
impl VibrationBackend for InMemoryVibrationBackend {
    async fn vibrate(&self, duration: VibrationDuration) -> VibrationBackendResult<()> {
        self.update(|state| {
            state.history.push(duration);
            state.running = Some(duration);
        })
    }

    async fn cancel(&self) -> VibrationBackendResult<()> {
        self.update(|state| {
            state.running = None;
            state.cancellations += 1;
        })
    }
}
