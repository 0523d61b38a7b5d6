//! Domain model for platform targets, capabilities and backend resolution.

mod capability;
mod error;
mod report;
mod target;

pub use capability::Capability;
pub use error::{CapabilityErrorKind, ParseCapabilityError};
pub use report::{BackendResolution, CapabilityReport, CapabilityReportEntry};
pub use target::PlatformTarget;
