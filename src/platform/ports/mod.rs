//! Port contracts shared by every capability backend.

mod backend;

pub use backend::CapabilityBackend;
