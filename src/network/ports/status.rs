//! Network status port.

use crate::network::domain::ConnectionProfile;
use crate::platform::ports::CapabilityBackend;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for network backend operations.
pub type NetworkBackendResult<T> = Result<T, NetworkBackendError>;

/// Host network stack contract.
#[async_trait]
pub trait NetworkStatusBackend: CapabilityBackend {
    /// Lists one profile per network interface, in a stable order.
    async fn list_profiles(&self) -> NetworkBackendResult<Vec<ConnectionProfile>>;
}

/// Errors returned by network backend adapters.
#[derive(Debug, Clone, Error)]
pub enum NetworkBackendError {
    /// Generic backend failure.
    #[error("network backend runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl NetworkBackendError {
    /// Wraps a runtime error from the backend adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
