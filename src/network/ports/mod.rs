//! Port contracts for network status backends.

mod status;

pub use status::{NetworkBackendError, NetworkBackendResult, NetworkStatusBackend};
