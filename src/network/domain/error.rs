//! Network domain validation errors.

use thiserror::Error;

/// Validation errors for connection profiles.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NetworkDomainError {
    /// The profile name is empty after trimming.
    #[error("connection profile name must not be empty")]
    EmptyProfileName,
}

/// Error returned when parsing an unknown connectivity level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown connectivity level: {0}")]
pub struct ParseConnectivityLevelError(pub String);
