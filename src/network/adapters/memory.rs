//! In-memory network status backend.

use crate::network::{
    domain::ConnectionProfile,
    ports::{NetworkBackendError, NetworkBackendResult, NetworkStatusBackend},
};
use crate::platform::ports::CapabilityBackend;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Network backend serving a fixed, replaceable list of profiles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNetworkBackend {
    profiles: Arc<RwLock<Vec<ConnectionProfile>>>,
}

impl InMemoryNetworkBackend {
    /// Creates a backend with no interfaces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the reported profiles.
    ///
    /// # Errors
    ///
    /// Returns backend runtime errors when lock acquisition fails.
    pub fn set_profiles(&self, profiles: Vec<ConnectionProfile>) -> NetworkBackendResult<()> {
        *self.profiles.write().map_err(|err| {
            NetworkBackendError::runtime(std::io::Error::other(err.to_string()))
        })? = profiles;
        Ok(())
    }
}

impl CapabilityBackend for InMemoryNetworkBackend {
    fn backend_name(&self) -> &'static str {
        "in-memory-network"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[async_trait]
impl NetworkStatusBackend for InMemoryNetworkBackend {
    async fn list_profiles(&self) -> NetworkBackendResult<Vec<ConnectionProfile>> {
        self.profiles
            .read()
            .map(|profiles| profiles.clone())
            .map_err(|err| NetworkBackendError::runtime(std::io::Error::other(err.to_string())))
    }
}
