//! Reference-counted display keep-awake requests.
//!
//! Any number of [`services::DisplayRequest`] tokens can ask for the display
//! to stay on. A process-wide [`services::DisplayRequestCoordinator`] counts
//! outstanding requests and drives the backend exactly once per edge: the
//! first request enables keep-awake and the last release disables it. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The coordinator and request tokens in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
