//! Snapshot of which backend serves each capability.

use super::{Capability, PlatformTarget};
use serde::Serialize;

/// Outcome of resolving the backend for one capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BackendResolution {
    /// A backend checked as available and serves the capability.
    Resolved {
        /// Stable backend name used in diagnostics.
        backend: &'static str,
    },
    /// No candidate backend is available on this host.
    Unavailable,
}

impl BackendResolution {
    /// Returns the resolved backend name, if any.
    #[must_use]
    pub const fn backend(self) -> Option<&'static str> {
        match self {
            Self::Resolved { backend } => Some(backend),
            Self::Unavailable => None,
        }
    }

    /// Returns whether a backend was resolved.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// One capability row in a [`CapabilityReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilityReportEntry {
    /// The capability domain.
    pub capability: Capability,
    /// How the capability was resolved.
    pub resolution: BackendResolution,
}

/// Per-capability backend resolution for the running host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityReport {
    target: PlatformTarget,
    entries: Vec<CapabilityReportEntry>,
}

impl CapabilityReport {
    /// Creates an empty report for a target.
    #[must_use]
    pub const fn new(target: PlatformTarget) -> Self {
        Self {
            target,
            entries: Vec::new(),
        }
    }

    /// Records the resolution for a capability, replacing any earlier entry.
    #[must_use]
    pub fn with_entry(mut self, capability: Capability, resolution: BackendResolution) -> Self {
        self.entries.retain(|entry| entry.capability != capability);
        self.entries.push(CapabilityReportEntry {
            capability,
            resolution,
        });
        self.entries.sort_by_key(|entry| entry.capability);
        self
    }

    /// Returns the build target.
    #[must_use]
    pub const fn target(&self) -> PlatformTarget {
        self.target
    }

    /// Returns all recorded entries in capability order.
    #[must_use]
    pub fn entries(&self) -> &[CapabilityReportEntry] {
        &self.entries
    }

    /// Returns the resolution recorded for a capability.
    ///
    /// Capabilities that were never recorded report as unavailable.
    #[must_use]
    pub fn resolution(&self, capability: Capability) -> BackendResolution {
        self.entries
            .iter()
            .find(|entry| entry.capability == capability)
            .map_or(BackendResolution::Unavailable, |entry| entry.resolution)
    }
}
