//! Connection profile queries.

use super::{NetworkServiceError, NetworkServiceResult};
use crate::network::{
    domain::{ConnectionProfile, NetworkConnectivityLevel},
    ports::NetworkStatusBackend,
};
use crate::platform::{domain::PlatformTarget, services::BackendRegistry};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Read-only view of the host's network connections.
#[derive(Clone)]
pub struct NetworkInformation {
    backend: Option<Arc<dyn NetworkStatusBackend>>,
}

impl NetworkInformation {
    /// Creates a view over a resolved backend, or over none.
    #[must_use]
    pub const fn new(backend: Option<Arc<dyn NetworkStatusBackend>>) -> Self {
        Self { backend }
    }

    /// Creates a view over the preferred available backend.
    #[must_use]
    pub fn from_registry(registry: &BackendRegistry<dyn NetworkStatusBackend>) -> Self {
        Self::new(registry.resolve())
    }

    /// Returns the name of the backend in use, if any.
    #[must_use]
    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|backend| backend.backend_name())
    }

    /// Lists every connection profile.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkServiceError::PlatformNotSupported`] with no backend
    /// and backend failures.
    pub async fn get_connection_profiles(&self) -> NetworkServiceResult<Vec<ConnectionProfile>> {
        let backend = self
            .backend
            .as_ref()
            .ok_or(NetworkServiceError::PlatformNotSupported(PlatformTarget::current()))?;
        let profiles = backend.list_profiles().await?;
        debug!(
            backend = backend.backend_name(),
            count = profiles.len(),
            "listed connection profiles"
        );
        Ok(profiles)
    }

    /// Returns the profile with the best connectivity, or `None` when every
    /// connection is down. Ties go to the profile listed first.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkServiceError::PlatformNotSupported`] with no backend
    /// and backend failures.
    pub async fn get_internet_connection_profile(
        &self,
    ) -> NetworkServiceResult<Option<ConnectionProfile>> {
        let best = self
            .get_connection_profiles()
            .await?
            .into_iter()
            .filter(|profile| profile.connectivity() > NetworkConnectivityLevel::None)
            .reduce(|best, candidate| {
                if candidate.connectivity() > best.connectivity() {
                    candidate
                } else {
                    best
                }
            });
        Ok(best)
    }
}

impl fmt::Debug for NetworkInformation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NetworkInformation")
            .field("backend", &self.backend_name())
            .finish()
    }
}
