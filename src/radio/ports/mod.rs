//! Port contracts for radio backends.

mod backend;

pub use backend::{RadioBackend, RadioBackendError, RadioBackendResult};
