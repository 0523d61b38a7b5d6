//! Error types for radio domain validation and parsing.

use super::RadioState;
use thiserror::Error;

/// Errors returned while constructing radio domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RadioDomainError {
    /// The radio identifier is empty after trimming.
    #[error("radio id must not be empty")]
    EmptyRadioId,

    /// The radio display name is empty after trimming.
    #[error("radio name must not be empty")]
    EmptyRadioName,

    /// Only `on` and `off` can be requested; other states are reported only.
    #[error("radio state '{0}' cannot be requested (only 'on' and 'off' are settable)")]
    UnsettableState(RadioState),
}

/// Error returned while parsing a radio kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown radio kind: {0}")]
pub struct ParseRadioKindError(pub String);

/// Error returned while parsing a radio state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown radio state: {0}")]
pub struct ParseRadioStateError(pub String);
