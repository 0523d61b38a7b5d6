//! Port contracts for vibration backends.

mod motor;

pub use motor::{VibrationBackend, VibrationBackendError, VibrationBackendResult};
