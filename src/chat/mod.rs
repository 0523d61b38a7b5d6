//! SMS compose delegation.
//!
//! [`services::ChatMessageManager`] hands a prepared message to whichever
//! composer the host offers, so the user can review and send it. The crate
//! never sends messages itself. When the preferred composer turns out to be
//! unusable at dispatch time, the next available composer is tried. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The public manager in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
