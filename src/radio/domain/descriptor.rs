//! Radio identity and validated descriptors.

use super::{RadioDomainError, RadioKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-scoped radio identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadioId(String);

impl RadioId {
    /// Creates a validated radio identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RadioDomainError::EmptyRadioId`] when the trimmed value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, RadioDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(RadioDomainError::EmptyRadioId);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RadioId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RadioId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Unvalidated radio description as reported by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioRecord {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Radio category.
    pub kind: RadioKind,
}

impl RadioRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: RadioKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// Validated radio description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioDescriptor {
    id: RadioId,
    name: String,
    kind: RadioKind,
}

impl RadioDescriptor {
    /// Creates a validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RadioDomainError`] when the identifier or name is empty.
    pub fn new(
        id: RadioId,
        name: impl Into<String>,
        kind: RadioKind,
    ) -> Result<Self, RadioDomainError> {
        let normalized = name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(RadioDomainError::EmptyRadioName);
        }
        Ok(Self {
            id,
            name: normalized,
            kind,
        })
    }

    /// Returns the radio identifier.
    #[must_use]
    pub const fn id(&self) -> &RadioId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the radio category.
    #[must_use]
    pub const fn kind(&self) -> RadioKind {
        self.kind
    }
}

impl TryFrom<RadioRecord> for RadioDescriptor {
    type Error = RadioDomainError;

    fn try_from(record: RadioRecord) -> Result<Self, Self::Error> {
        Self::new(RadioId::new(record.id)?, record.name, record.kind)
    }
}
