//! Caller-supplied chat message.

use serde::{Deserialize, Serialize};

/// Message to hand to the host's composer.
///
/// Recipients keep their insertion order; duplicates are allowed and passed
/// through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    body: String,
    recipients: Vec<String>,
}

impl ChatMessage {
    /// Creates a message with a body and no recipients.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            recipients: Vec::new(),
        }
    }

    /// Appends one recipient.
    #[must_use]
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipients.push(recipient.into());
        self
    }

    /// Appends several recipients in order.
    #[must_use]
    pub fn with_recipients<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipients
            .extend(recipients.into_iter().map(Into::into));
        self
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the recipients in insertion order.
    #[must_use]
    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }
}
