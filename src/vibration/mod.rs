//! Device vibration.
//!
//! [`services::VibrationDevice`] validates durations eagerly and forwards them
//! to a vibration motor backend. No desktop target ships a motor backend, so
//! the system registry is empty there and every action reports the platform
//! as unsupported.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
