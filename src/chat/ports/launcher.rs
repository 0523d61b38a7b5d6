//! URI launcher port.

use crate::platform::ports::CapabilityBackend;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for launcher operations.
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Host facility that opens a URI in its registered handler.
#[async_trait]
pub trait UriLauncher: CapabilityBackend {
    /// Opens a URI and waits for the opener to hand it off.
    async fn launch(&self, uri: &str) -> LaunchResult<()>;
}

/// Errors returned by launcher adapters.
#[derive(Debug, Clone, Error)]
pub enum LaunchError {
    /// The opener program could not be found.
    #[error("URI opener '{0}' not found")]
    NotFound(String),

    /// The opener ran and reported failure.
    #[error("URI opener '{program}' failed: {reason}")]
    Failed {
        /// Opener program.
        program: String,
        /// Exit status or signal description.
        reason: String,
    },

    /// Generic launcher failure.
    #[error("URI launcher runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl LaunchError {
    /// Wraps a runtime error from the launcher adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
