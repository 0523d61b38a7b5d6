//! In-memory keep-awake backend.

use crate::display::ports::{KeepAwakeBackend, KeepAwakeError, KeepAwakeResult};
use crate::platform::ports::CapabilityBackend;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Keep-awake backend that only counts calls.
///
/// Clones share counters, so a test can keep one clone and hand another to
/// the coordinator.
#[derive(Debug, Clone)]
pub struct InMemoryKeepAwake {
    enables: Arc<AtomicUsize>,
    disables: Arc<AtomicUsize>,
    held: Arc<AtomicBool>,
    fail_enable: Arc<AtomicBool>,
    fail_disable: Arc<AtomicBool>,
    available: Arc<AtomicBool>,
}

impl Default for InMemoryKeepAwake {
    fn default() -> Self {
        Self {
            enables: Arc::new(AtomicUsize::new(0)),
            disables: Arc::new(AtomicUsize::new(0)),
            held: Arc::new(AtomicBool::new(false)),
            fail_enable: Arc::new(AtomicBool::new(false)),
            fail_disable: Arc::new(AtomicBool::new(false)),
            available: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl InMemoryKeepAwake {
    /// Creates an available backend with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many times `enable` succeeded.
    #[must_use]
    pub fn enable_calls(&self) -> usize {
        self.enables.load(Ordering::SeqCst)
    }

    /// Returns how many times `disable` was called.
    #[must_use]
    pub fn disable_calls(&self) -> usize {
        self.disables.load(Ordering::SeqCst)
    }

    /// Reports whether keep-awake is currently held.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }

    /// Makes `enable` fail.
    pub fn set_fail_enable(&self, fail: bool) {
        self.fail_enable.store(fail, Ordering::SeqCst);
    }

    /// Makes `disable` fail after releasing the hold.
    pub fn set_fail_disable(&self, fail: bool) {
        self.fail_disable.store(fail, Ordering::SeqCst);
    }

    /// Sets the result of availability checks.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }
}

impl CapabilityBackend for InMemoryKeepAwake {
    fn backend_name(&self) -> &'static str {
        "in-memory-keep-awake"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

impl KeepAwakeBackend for InMemoryKeepAwake {
    fn enable(&self) -> KeepAwakeResult<()> {
        if self.fail_enable.load(Ordering::SeqCst) {
            return Err(KeepAwakeError::Failed("enable refused".to_owned()));
        }
        self.enables.fetch_add(1, Ordering::SeqCst);
        self.held.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn disable(&self) -> KeepAwakeResult<()> {
        self.disables.fetch_add(1, Ordering::SeqCst);
        self.held.store(false, Ordering::SeqCst);
        if self.fail_disable.load(Ordering::SeqCst) {
            return Err(KeepAwakeError::Failed("disable refused".to_owned()));
        }
        Ok(())
    }
}
