//! Domain types for display requests.

mod counter;
mod error;
mod status;

pub use counter::{ActivationCounter, Transition};
pub use error::DisplayDomainError;
pub use status::DisplayRequestStatus;
