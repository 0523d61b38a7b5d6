//! Process-wide activation counter driving the keep-awake backend.

use super::{DisplayRequestError, DisplayRequestResult};
use crate::config::ShimConfig;
use crate::display::{
    adapters,
    domain::{ActivationCounter, DisplayRequestStatus, Transition},
    ports::KeepAwakeBackend,
};
use crate::platform::{domain::PlatformTarget, services::BackendRegistry};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use tracing::{debug, info, warn};

static GLOBAL: OnceLock<Arc<DisplayRequestCoordinator>> = OnceLock::new();

/// Counts outstanding display requests and drives the backend on each edge.
///
/// Counter changes and backend calls happen under one mutex, so the backend
/// sees exactly one `enable` per 0→1 transition and exactly one `disable` per
/// 1→0 transition regardless of how many threads race.
pub struct DisplayRequestCoordinator<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    backend: Option<Arc<dyn KeepAwakeBackend>>,
    clock: Arc<C>,
    state: Mutex<CoordinatorState>,
}

#[derive(Debug, Default)]
struct CoordinatorState {
    counter: ActivationCounter,
    active_since: Option<DateTime<Utc>>,
}

impl<C> DisplayRequestCoordinator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a coordinator over a resolved backend, or over none.
    #[must_use]
    pub fn new(backend: Option<Arc<dyn KeepAwakeBackend>>, clock: Arc<C>) -> Self {
        Self {
            backend,
            clock,
            state: Mutex::new(CoordinatorState::default()),
        }
    }

    /// Creates a coordinator over the preferred available backend.
    #[must_use]
    pub fn from_registry(registry: &BackendRegistry<dyn KeepAwakeBackend>, clock: Arc<C>) -> Self {
        Self::new(registry.resolve(), clock)
    }

    /// Returns the name of the backend in use, if any.
    #[must_use]
    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|backend| backend.backend_name())
    }

    /// Returns the current request count and activation time.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayRequestError::StatePoisoned`] when a previous holder
    /// of the state lock panicked.
    pub fn status(&self) -> DisplayRequestResult<DisplayRequestStatus> {
        let state = self.lock_state()?;
        Ok(DisplayRequestStatus {
            active_requests: state.counter.active(),
            active_since: state.active_since,
            backend: self.backend_name(),
        })
    }

    /// Records one request, enabling the backend on the first.
    ///
    /// Returns the new count. When enabling fails the count is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayRequestError::PlatformNotSupported`] with no backend
    /// and [`DisplayRequestError::Backend`] when enabling fails.
    pub fn acquire(&self) -> DisplayRequestResult<u32> {
        let backend = self.require_backend()?;
        let mut state = self.lock_state()?;

        let mut next = state.counter;
        if next.increment()? == Transition::Activated {
            backend.enable()?;
            state.active_since = Some(self.clock.utc());
            info!(backend = backend.backend_name(), "display keep-awake enabled");
        }
        state.counter = next;
        debug!(active = next.active(), "display request acquired");
        Ok(next.active())
    }

    /// Records one release, disabling the backend on the last.
    ///
    /// Returns the new count. When disabling fails the count still reaches
    /// zero and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayRequestError::Domain`] when no request is
    /// outstanding, [`DisplayRequestError::PlatformNotSupported`] with no
    /// backend and [`DisplayRequestError::Backend`] when disabling fails.
    pub fn release(&self) -> DisplayRequestResult<u32> {
        let backend = self.require_backend()?;
        let mut state = self.lock_state()?;

        let transition = state.counter.decrement()?;
        debug!(active = state.counter.active(), "display request released");
        if transition == Transition::Deactivated {
            state.active_since = None;
            if let Err(err) = backend.disable() {
                warn!(error = %err, "display keep-awake disable failed");
                return Err(err.into());
            }
            info!(backend = backend.backend_name(), "display keep-awake disabled");
        }
        Ok(state.counter.active())
    }

    fn require_backend(&self) -> DisplayRequestResult<&Arc<dyn KeepAwakeBackend>> {
        self.backend
            .as_ref()
            .ok_or(DisplayRequestError::PlatformNotSupported(PlatformTarget::current()))
    }

    fn lock_state(&self) -> DisplayRequestResult<MutexGuard<'_, CoordinatorState>> {
        self.state
            .lock()
            .map_err(|_| DisplayRequestError::StatePoisoned)
    }
}

impl DisplayRequestCoordinator {
    /// Returns the process-wide coordinator if it has been initialised.
    #[must_use]
    pub fn global() -> Option<Arc<Self>> {
        GLOBAL.get().cloned()
    }

    /// Returns the process-wide coordinator, initialising it from `config`
    /// on first use. Later calls ignore `config`.
    #[must_use]
    pub fn global_or_init(config: &ShimConfig) -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| {
            let coordinator = Self::from_registry(
                &adapters::system_registry(config),
                Arc::new(DefaultClock),
            );
            debug!(
                backend = coordinator.backend_name().unwrap_or("none"),
                "initialised process-wide display request coordinator"
            );
            Arc::new(coordinator)
        }))
    }
}

impl<C> fmt::Debug for DisplayRequestCoordinator<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DisplayRequestCoordinator")
            .field("backend", &self.backend_name())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
