//! Connection profile.

use super::{NetworkAdapterKind, NetworkConnectivityLevel, NetworkDomainError};
use serde::{Deserialize, Serialize};

/// One network connection as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    name: String,
    adapter_kind: NetworkAdapterKind,
    connectivity: NetworkConnectivityLevel,
}

impl ConnectionProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkDomainError::EmptyProfileName`] when the trimmed name
    /// is empty.
    pub fn new(
        name: impl Into<String>,
        adapter_kind: NetworkAdapterKind,
        connectivity: NetworkConnectivityLevel,
    ) -> Result<Self, NetworkDomainError> {
        let normalized = name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(NetworkDomainError::EmptyProfileName);
        }
        Ok(Self {
            name: normalized,
            adapter_kind,
            connectivity,
        })
    }

    /// Returns the profile name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the adapter medium.
    #[must_use]
    pub const fn adapter_kind(&self) -> NetworkAdapterKind {
        self.adapter_kind
    }

    /// Returns the connectivity level.
    #[must_use]
    pub const fn connectivity(&self) -> NetworkConnectivityLevel {
        self.connectivity
    }

    /// Reports whether the profile reaches the internet in any form.
    #[must_use]
    pub fn has_internet(&self) -> bool {
        self.connectivity >= NetworkConnectivityLevel::ConstrainedInternetAccess
    }
}
