//! winrt-shim: platform capability adapters with a WinRT-shaped API.
//!
//! Each device capability is exposed as one public type whose behaviour comes
//! from a backend strategy chosen for the build target and checked once at
//! runtime. Callers never branch on the operating system; a capability with
//! no usable backend reports `PlatformNotSupported` instead of silently doing
//! nothing.
//!
//! # Architecture
//!
//! Every capability module follows hexagonal architecture principles:
//!
//! - **Domain**: validated value types with no platform dependencies
//! - **Ports**: backend traits, all extending [`platform::ports::CapabilityBackend`]
//! - **Adapters**: concrete backends (sysfs, child processes, in-memory)
//! - **Services**: the public capability types
//!
//! # Modules
//!
//! - [`platform`]: build-target detection and backend resolution
//! - [`radio`]: Bluetooth radio catalogue and switching
//! - [`chat`]: SMS compose delegation with composer fallback
//! - [`display`]: reference-counted display keep-awake requests
//! - [`vibration`]: vibration motor with validated durations
//! - [`network`]: connection profiles and internet reachability
//! - [`ui`]: colour and geometry value types
//! - [`config`]: host configuration for backend construction
//! - [`system`]: one-call wiring of every capability
//!
//! The crate logs through `tracing` and never installs a subscriber.

pub mod chat;
pub mod config;
pub mod display;
pub mod network;
pub mod platform;
pub mod radio;
pub mod system;
pub mod ui;
pub mod vibration;

pub use config::ShimConfig;
pub use platform::domain::CapabilityErrorKind;
pub use system::SystemServices;
