//! Domain types for connection profiles.

mod error;
mod kind;
mod profile;

pub use error::{NetworkDomainError, ParseConnectivityLevelError};
pub use kind::{NetworkAdapterKind, NetworkConnectivityLevel};
pub use profile::ConnectionProfile;
