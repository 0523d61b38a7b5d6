//! Backend selection for capability adapters.
//!
//! Every capability in this crate is a single public type whose behaviour is
//! supplied by one backend strategy. The list of candidate strategies is fixed
//! per build target; which of them is usable is checked once at runtime and
//! cached. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Resolution services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;
