//! Network information services.

mod error;
mod information;

pub use error::{NetworkServiceError, NetworkServiceResult};
pub use information::NetworkInformation;
