//! In-memory radio backend.

use crate::platform::ports::CapabilityBackend;
use crate::radio::{
    domain::{RadioAccessStatus, RadioId, RadioRecord, RadioState},
    ports::{RadioBackend, RadioBackendError, RadioBackendResult},
};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory radio backend.
///
/// Models radio switching without touching hardware. It is suitable for unit
/// and integration tests and for headless hosts that still want a radio
/// catalogue.
#[derive(Debug, Clone)]
pub struct InMemoryRadioBackend {
    state: Arc<RwLock<InMemoryRadioState>>,
    available: Arc<AtomicBool>,
}

#[derive(Debug)]
struct InMemoryRadioState {
    radios: BTreeMap<String, StoredRadio>,
    refused: HashSet<RadioId>,
    write_only: HashSet<RadioId>,
    access_status: RadioAccessStatus,
}

#[derive(Debug, Clone)]
struct StoredRadio {
    record: RadioRecord,
    state: RadioState,
}

impl Default for InMemoryRadioBackend {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryRadioState {
                radios: BTreeMap::new(),
                refused: HashSet::new(),
                write_only: HashSet::new(),
                access_status: RadioAccessStatus::Allowed,
            })),
            available: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl InMemoryRadioBackend {
    /// Creates an empty, available backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a radio.
    ///
    /// Records are stored as given, without validation, so tests can model
    /// malformed platform data.
    ///
    /// # Errors
    ///
    /// Returns backend runtime errors when lock acquisition fails.
    pub fn insert_radio(&self, record: RadioRecord, state: RadioState) -> RadioBackendResult<()> {
        let mut guard = self.write_state()?;
        guard
            .radios
            .insert(record.id.clone(), StoredRadio { record, state });
        Ok(())
    }

    /// Makes state changes for a radio fail with a system refusal.
    ///
    /// # Errors
    ///
    /// Returns backend runtime errors when lock acquisition fails.
    pub fn refuse_changes(&self, radio_id: RadioId) -> RadioBackendResult<()> {
        self.write_state()?.refused.insert(radio_id);
        Ok(())
    }

    /// Models a radio that can be switched but whose state cannot be read.
    ///
    /// # Errors
    ///
    /// Returns backend runtime errors when lock acquisition fails.
    pub fn make_write_only(&self, radio_id: RadioId) -> RadioBackendResult<()> {
        self.write_state()?.write_only.insert(radio_id);
        Ok(())
    }

    /// Sets the answer returned by access requests.
    ///
    /// # Errors
    ///
    /// Returns backend runtime errors when lock acquisition fails.
    pub fn set_access_status(&self, status: RadioAccessStatus) -> RadioBackendResult<()> {
        self.write_state()?.access_status = status;
        Ok(())
    }

    /// Sets the result of availability checks.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn write_state(&self) -> RadioBackendResult<RwLockWriteGuard<'_, InMemoryRadioState>> {
        self.state
            .write()
            .map_err(|err| RadioBackendError::runtime(std::io::Error::other(err.to_string())))
    }

    fn read_state(&self) -> RadioBackendResult<RwLockReadGuard<'_, InMemoryRadioState>> {
        self.state
            .read()
            .map_err(|err| RadioBackendError::runtime(std::io::Error::other(err.to_string())))
    }
}

impl CapabilityBackend for InMemoryRadioBackend {
    fn backend_name(&self) -> &'static str {
        "in-memory-radio"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RadioBackend for InMemoryRadioBackend {
    async fn list_radios(&self) -> RadioBackendResult<Vec<RadioRecord>> {
        let state = self.read_state()?;
        Ok(state
            .radios
            .values()
            .map(|stored| stored.record.clone())
            .collect())
    }

    async fn radio_state(&self, radio_id: &RadioId) -> RadioBackendResult<RadioState> {
        let state = self.read_state()?;
        let stored = state
            .radios
            .get(radio_id.as_str())
            .ok_or_else(|| RadioBackendError::NotFound(radio_id.clone()))?;
        if state.write_only.contains(radio_id) {
            return Ok(RadioState::Unknown);
        }
        Ok(stored.state)
    }

    async fn set_radio_state(
        &self,
        radio_id: &RadioId,
        requested: RadioState,
    ) -> RadioBackendResult<RadioAccessStatus> {
        let mut state = self.write_state()?;
        if state.refused.contains(radio_id) {
            return Err(RadioBackendError::AccessDenied(radio_id.clone()));
        }
        let write_only = state.write_only.contains(radio_id);
        let stored = state
            .radios
            .get_mut(radio_id.as_str())
            .ok_or_else(|| RadioBackendError::NotFound(radio_id.clone()))?;
        if stored.state == RadioState::Disabled {
            return Err(RadioBackendError::AccessDenied(radio_id.clone()));
        }
        stored.state = requested;
        if write_only {
            return Ok(RadioAccessStatus::Unspecified);
        }
        Ok(RadioAccessStatus::Allowed)
    }

    async fn request_access(&self) -> RadioAccessStatus {
        self.read_state()
            .map_or(RadioAccessStatus::Unspecified, |state| state.access_status)
    }

    fn device_selector(&self) -> String {
        "memory:kind=bluetooth".to_owned()
    }
}
