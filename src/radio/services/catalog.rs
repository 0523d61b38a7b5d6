//! Radio enumeration service.

use super::{Radio, RadioServiceError, RadioServiceResult};
use crate::platform::{domain::PlatformTarget, services::BackendRegistry};
use crate::radio::{
    domain::{RadioAccessStatus, RadioDescriptor, RadioId, RadioKind, RadioRecord},
    ports::RadioBackend,
};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Catalogue of the Bluetooth radios available on the host.
///
/// The catalogue keeps no state of its own: every enumeration is a fresh
/// backend query.
#[derive(Clone)]
pub struct RadioCatalog {
    backend: Option<Arc<dyn RadioBackend>>,
}

impl RadioCatalog {
    /// Creates a catalogue over a resolved backend, or over none.
    #[must_use]
    pub const fn new(backend: Option<Arc<dyn RadioBackend>>) -> Self {
        Self { backend }
    }

    /// Creates a catalogue over the preferred available backend.
    #[must_use]
    pub fn from_registry(registry: &BackendRegistry<dyn RadioBackend>) -> Self {
        Self::new(registry.resolve())
    }

    /// Returns the name of the backend in use, if any.
    #[must_use]
    pub fn backend_name(&self) -> Option<&'static str> {
        self.backend.as_ref().map(|backend| backend.backend_name())
    }

    /// Enumerates the Bluetooth radios on the host.
    ///
    /// Returns an empty list when the host has no radio subsystem. Records
    /// that fail validation are skipped, never returned with defaults. A
    /// backend that reports the same identifier twice yields one handle, for
    /// the first record.
    ///
    /// # Errors
    ///
    /// Returns [`RadioServiceError::Backend`] when the backend fails to
    /// enumerate.
    pub async fn get_radios(&self) -> RadioServiceResult<Vec<Radio>> {
        let Some(backend) = self.backend.as_ref() else {
            debug!("no radio backend resolved; reporting no radios");
            return Ok(Vec::new());
        };

        let records = backend.list_radios().await?;
        let mut seen = HashSet::new();
        let radios: Vec<Radio> = records
            .into_iter()
            .filter_map(validated_bluetooth)
            .filter(|descriptor| first_sighting(&mut seen, descriptor))
            .map(|descriptor| Radio::new(descriptor, Arc::clone(backend)))
            .collect();
        debug!(
            backend = backend.backend_name(),
            count = radios.len(),
            "enumerated radios"
        );
        Ok(radios)
    }

    /// Looks up a Bluetooth radio by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RadioServiceError::Domain`] for an empty identifier,
    /// [`RadioServiceError::PlatformNotSupported`] when no backend is
    /// resolved, and backend enumeration errors.
    pub async fn from_id(&self, radio_id: &str) -> RadioServiceResult<Option<Radio>> {
        let wanted = RadioId::new(radio_id)?;
        let backend = self
            .backend
            .as_ref()
            .ok_or(RadioServiceError::PlatformNotSupported(PlatformTarget::current()))?;

        let radio = backend
            .list_radios()
            .await?
            .into_iter()
            .filter_map(validated_bluetooth)
            .find(|descriptor| *descriptor.id() == wanted)
            .map(|descriptor| Radio::new(descriptor, Arc::clone(backend)));
        Ok(radio)
    }

    /// Returns the backend's device selector, or an empty string when no
    /// backend is resolved.
    #[must_use]
    pub fn get_device_selector(&self) -> String {
        self.backend
            .as_ref()
            .map(|backend| backend.device_selector())
            .unwrap_or_default()
    }

    /// Requests permission to control radios.
    ///
    /// Backends without an access-gating concept answer
    /// [`RadioAccessStatus::Allowed`]. With no backend the answer is
    /// [`RadioAccessStatus::DeniedBySystem`].
    pub async fn request_access(&self) -> RadioAccessStatus {
        match self.backend.as_ref() {
            Some(backend) => backend.request_access().await,
            None => RadioAccessStatus::DeniedBySystem,
        }
    }
}

impl fmt::Debug for RadioCatalog {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RadioCatalog")
            .field("backend", &self.backend_name())
            .finish()
    }
}

fn validated_bluetooth(record: RadioRecord) -> Option<RadioDescriptor> {
    if record.kind != RadioKind::Bluetooth {
        return None;
    }
    let raw_id = record.id.clone();
    match RadioDescriptor::try_from(record) {
        Ok(descriptor) => Some(descriptor),
        Err(err) => {
            warn!(radio = %raw_id, error = %err, "skipping invalid radio record");
            None
        }
    }
}

fn first_sighting(seen: &mut HashSet<RadioId>, descriptor: &RadioDescriptor) -> bool {
    let fresh = seen.insert(descriptor.id().clone());
    if !fresh {
        debug!(radio = %descriptor.id(), "skipping duplicate radio record");
    }
    fresh
}
