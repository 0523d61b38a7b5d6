//! Ordered backend candidates for one capability.

use crate::platform::{
    domain::{BackendResolution, Capability},
    ports::CapabilityBackend,
};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Build-time ordered list of backend strategies for one capability.
///
/// Candidates are registered in preference order. The first call to
/// [`resolve`](Self::resolve) or [`resolve_all`](Self::resolve_all) checks
/// every candidate once and caches the result; later calls never check again.
/// Registering a new candidate discards the cached result.
pub struct BackendRegistry<B>
where
    B: ?Sized + CapabilityBackend,
{
    capability: Capability,
    candidates: Vec<Arc<B>>,
    resolved: OnceLock<Vec<Arc<B>>>,
}

impl<B> BackendRegistry<B>
where
    B: ?Sized + CapabilityBackend,
{
    /// Creates a registry with no candidates.
    #[must_use]
    pub const fn new(capability: Capability) -> Self {
        Self {
            capability,
            candidates: Vec::new(),
            resolved: OnceLock::new(),
        }
    }

    /// Appends a candidate with lower preference than those already present.
    #[must_use]
    pub fn with_candidate(mut self, backend: Arc<B>) -> Self {
        self.register(backend);
        self
    }

    /// Appends a candidate and clears any cached resolution.
    pub fn register(&mut self, backend: Arc<B>) {
        self.candidates.push(backend);
        self.resolved = OnceLock::new();
    }

    /// Returns the capability served by this registry.
    #[must_use]
    pub const fn capability(&self) -> Capability {
        self.capability
    }

    /// Returns the names of every registered candidate in preference order.
    #[must_use]
    pub fn candidate_names(&self) -> Vec<&'static str> {
        self.candidates
            .iter()
            .map(|candidate| candidate.backend_name())
            .collect()
    }

    /// Returns every available candidate in preference order.
    pub fn resolve_all(&self) -> &[Arc<B>] {
        self.resolved.get_or_init(|| {
            self.candidates
                .iter()
                .filter(|candidate| {
                    let available = candidate.is_available();
                    debug!(
                        capability = %self.capability,
                        backend = candidate.backend_name(),
                        available,
                        "checked backend candidate"
                    );
                    available
                })
                .cloned()
                .collect()
        })
    }

    /// Returns the preferred available backend, or `None` when no candidate
    /// can serve the capability on this host.
    #[must_use]
    pub fn resolve(&self) -> Option<Arc<B>> {
        self.resolve_all().first().cloned()
    }

    /// Summarises the resolution for capability reports.
    #[must_use]
    pub fn resolution(&self) -> BackendResolution {
        self.resolve_all()
            .first()
            .map_or(BackendResolution::Unavailable, |backend| {
                BackendResolution::Resolved {
                    backend: backend.backend_name(),
                }
            })
    }
}

impl<B> fmt::Debug for BackendRegistry<B>
where
    B: ?Sized + CapabilityBackend,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BackendRegistry")
            .field("capability", &self.capability)
            .field("candidates", &self.candidate_names())
            .field("resolved", &self.resolved.get().map(Vec::len))
            .finish()
    }
}
