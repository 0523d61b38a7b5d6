//! Keep-awake backend port.

use crate::platform::ports::CapabilityBackend;
use std::sync::Arc;
use thiserror::Error;

/// Result type for keep-awake operations.
pub type KeepAwakeResult<T> = Result<T, KeepAwakeError>;

/// Host facility that stops the display from idling off.
///
/// Calls are serialised by the coordinator, which also guarantees they
/// alternate: `enable` is never called twice without a `disable` between.
pub trait KeepAwakeBackend: CapabilityBackend {
    /// Starts keeping the display awake.
    ///
    /// # Errors
    ///
    /// Returns [`KeepAwakeError`] when the inhibitor cannot be acquired.
    fn enable(&self) -> KeepAwakeResult<()>;

    /// Stops keeping the display awake.
    ///
    /// # Errors
    ///
    /// Returns [`KeepAwakeError`] when the inhibitor cannot be released.
    fn disable(&self) -> KeepAwakeResult<()>;
}

/// Errors returned by keep-awake adapters.
#[derive(Debug, Clone, Error)]
pub enum KeepAwakeError {
    /// The inhibitor could not be acquired or released.
    #[error("keep-awake inhibitor failed: {0}")]
    Failed(String),

    /// Generic backend failure.
    #[error("keep-awake runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeepAwakeError {
    /// Wraps a runtime error from the backend adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
