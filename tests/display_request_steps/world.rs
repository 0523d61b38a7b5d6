//! Shared world state for display request BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use winrt_shim::display::{
    adapters::memory::InMemoryKeepAwake,
    ports::KeepAwakeBackend,
    services::{DisplayRequest, DisplayRequestCoordinator, DisplayRequestError},
};

/// Scenario world for display request behaviour tests.
pub struct DisplayWorld {
    /// Backend shared with the coordinator, kept for call counting.
    pub keep_awake: InMemoryKeepAwake,
    /// Coordinator under test.
    pub coordinator: Arc<DisplayRequestCoordinator>,
    /// Tokens created by the scenario, addressed from 1.
    pub tokens: Vec<Option<DisplayRequest>>,
    /// Error from the most recent failing request or release.
    pub last_error: Option<DisplayRequestError>,
}

impl DisplayWorld {
    /// Creates a world whose coordinator uses an in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        let keep_awake = InMemoryKeepAwake::new();
        let backend: Arc<dyn KeepAwakeBackend> = Arc::new(keep_awake.clone());
        Self {
            keep_awake,
            coordinator: Arc::new(DisplayRequestCoordinator::new(
                Some(backend),
                Arc::new(DefaultClock),
            )),
            tokens: Vec::new(),
            last_error: None,
        }
    }

    /// Replaces the coordinator with one that has no backend.
    pub fn remove_backend(&mut self) {
        self.coordinator = Arc::new(DisplayRequestCoordinator::new(None, Arc::new(DefaultClock)));
    }

    /// Returns the token at a one-based position.
    ///
    /// # Errors
    ///
    /// Returns an error when the token was never created or was dropped.
    pub fn token(&self, position: usize) -> Result<&DisplayRequest, eyre::Report> {
        position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .and_then(Option::as_ref)
            .ok_or_else(|| eyre::eyre!("no live display request token {position}"))
    }
}

impl Default for DisplayWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture providing a fresh display world.
#[fixture]
pub fn world() -> DisplayWorld {
    DisplayWorld::default()
}
