//! Network connection profiles.
//!
//! [`services::NetworkInformation`] reports the host's network interfaces as
//! connection profiles and picks the one that best reaches the internet. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The public query service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
