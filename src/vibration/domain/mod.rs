//! Domain types for vibration requests.

mod duration;

pub use duration::{VibrationDomainError, VibrationDuration};
