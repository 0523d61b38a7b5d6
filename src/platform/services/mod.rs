//! Backend registration and resolution services.

mod registry;

pub use registry::BackendRegistry;
