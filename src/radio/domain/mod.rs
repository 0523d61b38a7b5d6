//! Domain model for radios, their states and access outcomes.

mod descriptor;
mod error;
mod kind;

pub use descriptor::{RadioDescriptor, RadioId, RadioRecord};
pub use error::{ParseRadioKindError, ParseRadioStateError, RadioDomainError};
pub use kind::{RadioAccessStatus, RadioKind, RadioState};
