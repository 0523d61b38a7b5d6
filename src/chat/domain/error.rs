//! Chat domain validation errors.

use thiserror::Error;

/// Validation errors for compose requests.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ChatDomainError {
    /// The composer needs at least one recipient and none was given.
    #[error("message has no recipients")]
    NoRecipients,
}
