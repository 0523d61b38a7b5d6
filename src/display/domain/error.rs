//! Display domain errors.

use thiserror::Error;

/// Invariant violations of the activation counter.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DisplayDomainError {
    /// A release was attempted with no active request.
    #[error("display request released while none is active")]
    CounterUnderflow,

    /// The request count cannot be represented.
    #[error("too many outstanding display requests")]
    CounterOverflow,
}
