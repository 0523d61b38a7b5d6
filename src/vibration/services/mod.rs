//! Vibration services.

mod device;

pub use device::{VibrationDevice, VibrationServiceError, VibrationServiceResult};
