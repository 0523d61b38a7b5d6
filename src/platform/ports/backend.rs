//! Availability contract shared by capability backends.

/// Common surface of every capability backend.
///
/// Availability checks must be free of side effects: they never open, spawn
/// or initialise the resource the backend manages.
pub trait CapabilityBackend: Send + Sync {
    /// Returns a stable backend name for diagnostics.
    fn backend_name(&self) -> &'static str;

    /// Reports whether the backend can serve requests on this host.
    fn is_available(&self) -> bool;
}
