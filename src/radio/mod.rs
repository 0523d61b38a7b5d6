//! Device radio catalogue.
//!
//! Enumerates the radios a host exposes and hands out one [`services::Radio`]
//! handle per physical radio. Only Bluetooth radios are ever returned, even by
//! backends able to report other kinds. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The public catalogue and handle in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
